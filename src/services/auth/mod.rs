pub mod api_key;
pub mod factory;
pub mod outcome;
pub mod pipeline;
pub mod source;

pub use api_key::{
    ADMIN_ROLE, ApiKeyAuthenticator, ApiKeyOptions, ApiKeyOptionsError, DEFAULT_CLAIMS_ISSUER,
    DEFAULT_KEY_NAME, INVALID_KEY_MESSAGE, SCHEME_NAME, authenticate,
};
pub use factory::build_auth_pipeline;
pub use outcome::{AuthOutcome, Claim, Identity};
pub use pipeline::{AuthPipeline, AuthScheme};
pub use source::RequestKeySource;
