use crate::animation::AnimationState;
use crate::brain::BrainPipeline;
use crate::gpu::{FrameBinding, FrameUniforms, GpuContext, GpuOptions, PhysicalSize, RendererError};
use crate::particles::ParticlePipeline;
use crate::scene::{cloud_model, mesh_model, BrainScene};
use crate::synapses::SynapsePipeline;

use super::helpers::{log_first_frame, recovery_for, SurfaceRecovery};

/// GPU side of the background: context, shared frame binding, the three
/// pipelines, and the depth buffer.
pub struct RenderState {
    pub gpu: GpuContext,
    pub clear_color: wgpu::Color,
    frame: FrameBinding,
    brain: BrainPipeline,
    particles: ParticlePipeline,
    synapses: SynapsePipeline,
    depth_view: wgpu::TextureView,
}

impl RenderState {
    /// Create the GPU context for `target` and upload the scene.
    pub async fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        size: PhysicalSize,
        options: GpuOptions,
        scene: &BrainScene,
        initial: &AnimationState,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(target, size, options).await?;
        Ok(Self::from_gpu(gpu, scene, initial))
    }

    /// Build pipelines on an existing context.
    pub fn from_gpu(gpu: GpuContext, scene: &BrainScene, initial: &AnimationState) -> Self {
        let format = gpu.format();
        let frame = FrameBinding::new(&gpu.device);

        let brain = BrainPipeline::new(
            &gpu.device,
            format,
            &frame.layout,
            &scene.mesh.vertices,
            &scene.material,
        );
        let particles =
            ParticlePipeline::new(&gpu.device, format, &frame.layout, &scene.cloud.instances());
        let synapses = SynapsePipeline::new(
            &gpu.device,
            format,
            &frame.layout,
            &scene.segments,
            &initial.connection_opacity,
        );

        let depth_view = gpu.create_depth_view();
        let clear_color = scene.clear_color_for(gpu.is_srgb());

        tracing::info!(
            "Render state ready ({}x{}, {} mesh vertices, {} sprites, {} lines)",
            gpu.size.width,
            gpu.size.height,
            brain.vertex_count,
            particles.instance_count,
            synapses.vertex_count / 2,
        );

        Self {
            gpu,
            clear_color,
            frame,
            brain,
            particles,
            synapses,
            depth_view,
        }
    }

    /// Handle a resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth_view = self.gpu.create_depth_view();
    }

    pub fn size(&self) -> PhysicalSize {
        self.gpu.size
    }

    /// Upload this frame's state and draw it.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// that is not an error.
    pub fn render(&mut self, scene: &BrainScene, state: &AnimationState) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => match recovery_for(&e) {
                SurfaceRecovery::Reconfigure => {
                    tracing::warn!("Surface {e}; reconfiguring and skipping frame");
                    self.gpu.reconfigure();
                    return Ok(());
                }
                SurfaceRecovery::Skip => {
                    tracing::debug!("Surface {e}; skipping frame");
                    return Ok(());
                }
                SurfaceRecovery::Fail => {
                    tracing::error!("Failed to get surface texture: {e}");
                    return Err(e.into());
                }
            },
        };

        let uniforms = FrameUniforms::build(
            &scene.camera,
            &scene.lights,
            state,
            self.gpu.size,
            self.gpu.is_srgb(),
        );
        self.frame.update(&self.gpu.queue, &uniforms);
        self.brain.update_model(&self.gpu.queue, mesh_model(state));
        self.particles.update_model(&self.gpu.queue, cloud_model(state));
        self.synapses
            .update_opacity(&self.gpu.queue, &state.connection_opacity);

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("neuroglow frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("neuroglow main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Same order as the scene graph: sprites, lines, then the shell.
            self.particles.render(&mut pass, &self.frame.bind_group);
            self.synapses.render(&mut pass, &self.frame.bind_group);
            self.brain.render(&mut pass, &self.frame.bind_group);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
