use wgpu::*;

use super::resources::{InstanceData, RECT_INSTANCE_CAPACITY};
use super::Renderer;
use crate::digits::{digit_rects, DIGIT_WIDTH};
use crate::session::Scene;
use game_core::Config;

const COLOR_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const COLOR_GREY: [f32; 4] = [0.39, 0.39, 0.39, 1.0];

const CENTER_LINE_WIDTH: f32 = 2.0;
const SCORE_TOP: f32 = 40.0;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output
        .texture
        .create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects: center line, score digits, paddles
        let (rect_mesh, circle_mesh) = &renderer.meshes;
        pass.set_vertex_buffer(0, rect_mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(rect_mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..rect_mesh.index_count, 0, 0..rect_count);

        // Circle: the ball
        if scene.ball.is_some() {
            pass.set_vertex_buffer(0, circle_mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(circle_mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.ball.slice(..));
            pass.draw_indexed(0..circle_mesh.index_count, 0, 0..1);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, scene: &Scene) -> u32 {
    let rects = build_rect_instances(&renderer.config, scene);
    renderer
        .queue
        .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(&rects));

    if let Some(ball_pos) = scene.ball {
        let ball_instance = InstanceData {
            transform: [
                ball_pos.x,
                ball_pos.y,
                renderer.config.ball_radius * 2.0,
                renderer.config.ball_radius * 2.0,
            ],
            tint: COLOR_WHITE,
        };
        renderer
            .queue
            .write_buffer(&renderer.buffers.ball, 0, bytemuck::cast_slice(&[ball_instance]));
    }

    rects.len() as u32
}

/// Everything rectangular in the frame, in pixel coordinates
pub fn build_rect_instances(config: &Config, scene: &Scene) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(RECT_INSTANCE_CAPACITY);
    let center_x = config.window_width / 2.0;

    // Center line
    instances.push(InstanceData {
        transform: [
            center_x,
            config.window_height / 2.0,
            CENTER_LINE_WIDTH,
            config.window_height,
        ],
        tint: COLOR_GREY,
    });

    // Scores flank the center line, matching the classic layout
    for rect in digit_rects(scene.score_left, center_x - DIGIT_WIDTH * 2.0, SCORE_TOP) {
        instances.push(InstanceData {
            transform: rect,
            tint: COLOR_GREY,
        });
    }
    for rect in digit_rects(scene.score_right, center_x + DIGIT_WIDTH, SCORE_TOP) {
        instances.push(InstanceData {
            transform: rect,
            tint: COLOR_GREY,
        });
    }

    // Paddles: instances are center-based, paddle y is the top-left corner
    let half_w = config.paddle_width / 2.0;
    let half_h = config.paddle_height / 2.0;
    instances.push(InstanceData {
        transform: [
            config.paddle_x(0) + half_w,
            scene.paddle_left_y + half_h,
            config.paddle_width,
            config.paddle_height,
        ],
        tint: COLOR_WHITE,
    });
    instances.push(InstanceData {
        transform: [
            config.paddle_x(1) + half_w,
            scene.paddle_right_y + half_h,
            config.paddle_width,
            config.paddle_height,
        ],
        tint: COLOR_WHITE,
    });

    debug_assert!(instances.len() <= RECT_INSTANCE_CAPACITY);
    instances.truncate(RECT_INSTANCE_CAPACITY);
    instances
}
