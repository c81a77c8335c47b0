pub mod raw_record;
