//! Types shared between the log analyzer frontend and the analysis endpoint.

pub mod usecases;
