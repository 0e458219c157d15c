pub mod row_reader;
