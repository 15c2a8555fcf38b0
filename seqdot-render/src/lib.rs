/*!
# seqdot Rendering

Turns a dotplot `Grid` into an image. The pipeline is:

1. **Layout**: fit the grid into the requested image size without upscaling
2. **Raster**: paint every positive cell in binary or bucketed color
3. **Export**: encode the result as PNG, or as SVG rectangles

## Example

```no_run
use seqdot_core::Grid;
use seqdot_render::{save, ColorMode, RenderConfig, Renderer};

let grid = Grid::from_sequences(b"ACTGACTG", b"ACTGTTTT")?;
let renderer = Renderer::new(RenderConfig::default());
save(&renderer, &grid, ColorMode::Binary, "plot.png")?;
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod export;
pub mod layout;
pub mod raster;

pub use export::{save, write_png, ExportError, ExportResult};
#[cfg(feature = "vector-export")]
pub use export::SvgBuilder;
pub use layout::{CellLayout, RenderError, RenderResult, MIN_CELL_SIZE};
pub use raster::{ColorMode, RenderConfig, Renderer, Surface};
