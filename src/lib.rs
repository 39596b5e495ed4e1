//! dvg
//!
//! Turn small JSON data documents into chart vector scenes and self-contained
//! SVG. Pairs with the `dvg` CLI.
//!
//! ### Features
//! - Validate and normalize `{ "type": …, "data": […] }` documents
//! - Band and linear scales with padding, headroom and nice rounding
//! - Nine chart kinds: bar, pie, donut, network, tree, wordcloud, legend, pattern, text
//! - SVG export handed to an injected host as a `create-chart` message
//!
//! ### Example
//! ```no_run
//! use dvg::{Session, export::JsonLinesHost};
//!
//! let mut session = Session::new();
//! session.load_file("sales.json")?;
//! session.set_width_input("480");
//! let scene = session.render();
//! println!("{} primitives", scene.len());
//! session.export(&JsonLinesHost::new(std::io::stdout()))?;
//! # Ok::<(), dvg::ChartError>(())
//! ```

pub mod error;
pub mod export;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod scale;
pub mod scene;
pub mod session;
pub mod storage;
pub mod style;
pub mod svg;

pub use error::{ChartError, ValidationError};
pub use export::{ExportMessage, HostBridge, export_scene};
pub use models::{ChartDocument, ChartKind, DataRecord, Dimensions, Margin};
pub use pipeline::{ChartConfig, render};
pub use scene::VectorScene;
pub use session::Session;
pub use style::Rgb8;
