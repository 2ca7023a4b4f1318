use dotenv_codegen::dotenv;
use session::LogoutConfig;

const TOKEN_KEY: &str = dotenv!("TOKEN_KEY");
const LANDING_URL: &str = dotenv!("LANDING_URL");

pub fn logout_config() -> LogoutConfig {
    LogoutConfig::new(TOKEN_KEY, LANDING_URL)
}
