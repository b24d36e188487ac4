mod distribution;
mod end_to_end;
