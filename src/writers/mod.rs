pub mod analysed_writer;

pub use analysed_writer::AnalysedWriter;
