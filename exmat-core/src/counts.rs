mod aggregate;
mod matrix;
pub mod reader;
pub mod writer;

pub use self::{
    aggregate::{aggregate, sample_name, AggregateError},
    matrix::CountMatrix,
};
