pub mod criteria;
pub mod journals;
pub mod record;
pub mod response;
pub mod upload;
