//! Rendering functionality.

use crate::camera::Camera3d;
use crate::renderer::Renderer3d;

use super::Window;

impl Window {
    /// Renders one frame and presents it.
    ///
    /// The color and depth buffers are cleared, then `renderer` records its draw
    /// calls with `camera`, and the frame is presented. With vsync enabled,
    /// presentation waits for the next vertical blank.
    ///
    /// # Returns
    /// `true` if a frame was presented. Nothing is drawn while the window is
    /// minimized or when the surface texture cannot be acquired.
    pub fn render_3d(&mut self, renderer: &mut dyn Renderer3d, camera: &dyn Camera3d) -> bool {
        if self.canvas.is_minimized() {
            return false;
        }

        let frame = match self.canvas.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost or outdated, reconfiguring");
                self.canvas.reconfigure();
                return false;
            }
            Err(e) => {
                log::warn!("failed to acquire surface texture: {:?}", e);
                return false;
            }
        };
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let ctxt = self.canvas.context();
        let mut encoder = ctxt.create_command_encoder(Some("spincube_frame_encoder"));

        {
            let bg = self.background;
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: bg.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.canvas.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            renderer.render(camera, ctxt, &mut render_pass);
        }

        ctxt.submit(std::iter::once(encoder.finish()));
        self.canvas.present(frame);

        true
    }
}
