//! Objects used to encode ADF constraints into SAT solvers.

mod admissibility_encoding;

mod bipolar_encodings;

mod completion_encoding;
pub use completion_encoding::CompletionEncoding;

mod conflict_freeness_encoding;

mod context;
pub use context::SatEncodingContext;

mod refinement_encodings;

mod sat_encoding;
pub use sat_encoding::SatEncoding;

mod tseitin;
pub use tseitin::TseitinTransformer;
