//! # Views
//!
//! Server-side HTML templates loaded from the client `views/` directory.

use minijinja::{path_loader, Environment};
use pay_core::ClientToken;
use serde::Serialize;
use std::path::Path;

pub const CHECKOUT_TEMPLATE: &str = "checkout.html";
pub const CHECKOUT_TITLE: &str = "Fastlane - PayPal Integration Quick Start";

/// Variables for `checkout.html`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPage {
    pub title: String,
    /// Raw HTML, rendered unescaped
    pub prerequisite_scripts: String,
    pub init_script_path: String,
    pub stylesheet_path: String,
}

impl CheckoutPage {
    pub fn new(sdk_url: &str, client_token: &ClientToken) -> Self {
        Self {
            title: CHECKOUT_TITLE.to_string(),
            prerequisite_scripts: sdk_script_tag(sdk_url, client_token.as_str()),
            init_script_path: "app.js".to_string(),
            stylesheet_path: "./styles.css".to_string(),
        }
    }
}

fn sdk_script_tag(sdk_url: &str, client_token: &str) -> String {
    format!(
        r#"
        <script
          src="{}"
          data-sdk-client-token="{}"
          defer
        ></script>
      "#,
        sdk_url, client_token
    )
}

/// Template environment; templates are read from disk on first use
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: &S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}
