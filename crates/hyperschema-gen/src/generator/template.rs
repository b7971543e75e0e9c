//! The fixed source template for the generated mount module.
//!
//! The template is a versioned object with an explicit parameter schema (one
//! required substitution: the absolute schema file path). The route, the
//! content-type and the cache-control policy are part of the template's
//! contract, not configurable inputs. `validate()` exists so a broken template
//! is caught by unit tests instead of surfacing as a runtime defect.

use std::path::Path;

use anyhow::Context;
use proc_macro2::TokenStream;
use quote::quote;

pub const TEMPLATE_VERSION: u32 = 1;

/// Route the generated module registers on the application router.
pub const MOUNT_ROUTE: &str = "/schema";

const CONTENT_TYPE: &str = "application/schema+json";
const CACHE_CONTROL: &str = "public, max-age=3600";

/// Required substitution parameters for [`MountTemplate::render`].
#[derive(Debug, Clone, Copy)]
pub struct MountParams<'a> {
  /// Absolute path of the schema document the generated handler serves.
  pub schema_file: &'a Path,
}

/// Renders the mount module source for one schema file.
#[derive(Debug)]
pub struct MountTemplate {
  version: u32,
}

impl Default for MountTemplate {
  fn default() -> Self {
    Self::new()
  }
}

impl MountTemplate {
  pub fn new() -> Self {
    Self {
      version: TEMPLATE_VERSION,
    }
  }

  pub fn version(&self) -> u32 {
    self.version
  }

  /// Renders the template with a placeholder parameter and checks the result
  /// parses. Run from unit tests so a template defect fails the build, not a
  /// generation run.
  pub fn validate(&self) -> anyhow::Result<()> {
    self
      .render(&MountParams {
        schema_file: Path::new("/placeholder/schema.json"),
      })
      .map(drop)
  }

  /// Renders the mount module with `params` substituted. The output is valid
  /// but unformatted Rust source; formatting is the formatter's job.
  pub fn render(&self, params: &MountParams) -> anyhow::Result<String> {
    let schema_file = params.schema_file.to_str().ok_or_else(|| {
      anyhow::anyhow!(
        "schema file path is not valid UTF-8: {}",
        params.schema_file.display()
      )
    })?;

    let tokens = self.tokens(schema_file);
    syn::parse2::<syn::File>(tokens.clone())
      .with_context(|| format!("mount template v{} rendered invalid Rust", self.version))?;
    Ok(tokens.to_string())
  }

  fn tokens(&self, schema_file: &str) -> TokenStream {
    quote! {
      use std::sync::{Arc, OnceLock};

      use axum::{
        Router,
        extract::State,
        http::{HeaderValue, StatusCode, header},
        response::IntoResponse,
        routing::get,
      };

      const SCHEMA_FILE: &str = #schema_file;

      /// Lazily read schema bytes, created when the route is mounted and
      /// populated on the first request. Never invalidated for the life of
      /// the process.
      #[derive(Clone, Default)]
      pub struct SchemaCache {
        bytes: Arc<OnceLock<Vec<u8>>>,
      }

      impl SchemaCache {
        fn bytes(&self) -> Vec<u8> {
          self
            .bytes
            .get_or_init(|| std::fs::read(SCHEMA_FILE).unwrap_or_default())
            .clone()
        }
      }

      /// Registers the schema route on the application router.
      pub fn mount(router: Router) -> Router {
        router.route(
          #MOUNT_ROUTE,
          get(show_schema).with_state(SchemaCache::default()),
        )
      }

      async fn show_schema(State(cache): State<SchemaCache>) -> impl IntoResponse {
        (
          StatusCode::OK,
          [
            (header::CONTENT_TYPE, HeaderValue::from_static(#CONTENT_TYPE)),
            (header::CACHE_CONTROL, HeaderValue::from_static(#CACHE_CONTROL)),
          ],
          cache.bytes(),
        )
      }
    }
  }
}
