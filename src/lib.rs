pub mod canvas;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod geom;
pub mod lines;
pub mod model;
pub mod render;
pub mod scale;
pub mod sheet;
pub mod symbols;
pub mod theme;
pub mod view;

pub use canvas::{Canvas, Shape};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{load_config, DraftConfig};
pub use geom::{IsoCorner, Point2, Point3, Quarter, ViewMode};
pub use model::{parse_model, ProcessModel};
pub use render::render_svg;
pub use scale::{select_scale, sheet_by_label, SheetSize};
pub use theme::Theme;
pub use view::{compute_view, render, DiagramKind, ViewData};
