pub mod deploy;
pub mod deploy_token;

pub use deploy::{select_deployment, DeployCmd, DeploySelection};
pub use deploy_token::{DeployTokenCmd, TOKEN_NETWORK};
