pub mod directory_writer;
