pub mod cv;
pub mod form;
pub mod position;
