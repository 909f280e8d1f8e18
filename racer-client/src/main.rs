use std::time::Duration;

use log::{error, info};
use racer_core::scene::SceneLayout;
use racer_core::session::{DriveSession, LogPresenter};
use racer_core::GLOBAL_CONFIG;
use winit::{
    dpi::PhysicalSize,
    event::{Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use application::Application;
use controls::Controls;

mod application;
mod controls;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let car_color = GLOBAL_CONFIG
        .car_color()
        .expect("invalid car_color in config");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("racer")
        .with_inner_size(PhysicalSize::new(
            GLOBAL_CONFIG.window_width,
            GLOBAL_CONFIG.window_height,
        ))
        .build(&event_loop)
        .expect("could not create window");

    let size = window.inner_size();
    let mut controls = Controls::new(size.width, size.height, GLOBAL_CONFIG.gamepad_deadzone);
    controls.attach();

    // the renderer would build its meshes from this once, up front
    let scene = SceneLayout::new(car_color);
    info!(
        "scene: {} car parts, track outline of {} points, {} curbs, {} lights",
        scene.car.parts().len(),
        scene.track.outer.sample(8).len() + scene.track.inner.sample(8).len(),
        scene.track.curbs.len(),
        scene.lights.len()
    );

    let mut session = DriveSession::from_config(scene.car);
    session.camera_mut().set_viewport(size.width, size.height);

    let mut application = Application::new(
        controls,
        session,
        LogPresenter::new(GLOBAL_CONFIG.log_every_frames),
        Duration::from_millis(GLOBAL_CONFIG.frame_ms),
    );

    info!("client window open, drive with WASD/arrows and space to brake");

    event_loop.run(move |event, _, control_flow| {
        if *control_flow != ControlFlow::Exit {
            *control_flow = ControlFlow::WaitUntil(application.next_frame_at());
        }

        match event {
            // Window changes
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => application.on_resize(size),

            // X button on window clicked
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                application.controls.detach();
                *control_flow = ControlFlow::Exit;
            }

            // Keyboard input
            Event::WindowEvent {
                event:
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(key),
                                state,
                                ..
                            },
                        ..
                    },
                ..
            } => application.on_key(key, state),

            Event::WindowEvent {
                event: WindowEvent::Touch(touch),
                ..
            } => application.on_touch(touch),

            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => application.on_focus_changed(focused),

            Event::MainEventsCleared => match application.update() {
                Ok(true) => window.request_redraw(),
                Ok(false) => {}
                Err(e) => {
                    error!("stopping simulation: {}", e);
                    application.controls.detach();
                    *control_flow = ControlFlow::Exit;
                }
            },

            Event::RedrawRequested(_) => application.render(),

            _ => {}
        }
    });
}
