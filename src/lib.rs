/*!
# spincube

A rotating cube you can push around with the keyboard.

A window opens with a cube spinning around the `(1, 1, 0)` axis, one flat color
per face, seen through a fixed 80° perspective frustum. The cube turns by 0.7°
every frame and moves by 0.1 units each time a movement key is pressed or
auto-repeated:

* `W` / `S`: forward / backward (z axis).
* `A` / `D`: left / right (x axis).
* `Q` / `E`: up / down (y axis).
* `Escape`: quit.

The whole program is a single-threaded loop: render the frame, pump the window
events, advance the rotation. Rendering goes through [wgpu](https://wgpu.rs) and
the window is managed by [winit](https://docs.rs/winit).

The building blocks can be driven directly:

```no_run
use spincube::prelude::*;

fn main() -> anyhow::Result<()> {
    pollster::block_on(spincube::app::run(DemoConfig::default()))
}
```
*/
#![allow(non_upper_case_globals)]
#![allow(clippy::module_inception)]

#[macro_use]
extern crate bitflags;

pub use glamx;

pub mod app;
pub mod camera;
pub mod color;
pub mod config;
pub mod context;
pub mod controls;
pub mod event;
pub mod procedural;
pub mod renderer;
pub mod state;
pub mod window;

pub mod prelude {
    pub use crate::camera::*;
    pub use crate::color::*;
    pub use crate::config::*;
    pub use crate::context::*;
    pub use crate::controls::*;
    pub use crate::event::*;
    pub use crate::procedural::*;
    pub use crate::renderer::*;
    pub use crate::state::*;
    pub use crate::window::*;
    pub use glamx::{Mat4, Vec3};
}
