mod envelope;
mod list;

pub use envelope::DataEnvelope;
pub use list::ListResponse;
