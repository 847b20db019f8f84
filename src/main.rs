// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use eduvis::{
    config::*,
    controllers::{
        touch_pointer, InputEvent, OscCommand, OscController, Touchable, MOUSE_POINTER,
    },
    models::{Bounds, Decimal},
    views::{
        sorting::MAX_HEIGHT, ArrayError, ArrayStyle, FractionConverter, SortableArray, StepStyle,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scene {
    Converter,
    Array,
}

struct Model {
    // Core components:
    config: Config,
    palette: Palette,
    scene: Scene,
    converter: FractionConverter,
    array: SortableArray,

    // Comms components:
    osc_controller: Option<OscController>,

    // FPS
    last_update: Instant,
    fps: f32,

    // Message
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn model(app: &App) -> Model {
    // Load config
    let loaded = Config::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    init_tracing(&config.logging.filter);
    if let Err(e) = loaded {
        warn!("{}; using built-in defaults", e);
    }

    // Create OSC controller
    let osc_controller = match OscController::new(config.osc.rx_port) {
        Ok(controller) => {
            info!(port = config.osc.rx_port, "listening for OSC");
            Some(controller)
        }
        Err(e) => {
            warn!("OSC disabled: {}", e);
            None
        }
    };

    // Create window
    app.new_window()
        .title("eduvis")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .touch(touch)
        .resized(resized)
        .build()
        .expect("Failed to create window");

    let viewport = Bounds::centered(config.window.width as f32, config.window.height as f32);

    let converter = new_converter(&config, initial_value(&config), viewport);

    let mut array = new_array(&config).unwrap_or_else(|e| {
        warn!("[array] {}; using built-in defaults", e);
        let defaults = Config::default();
        new_array(&defaults).unwrap_or_else(|e| {
            error!("default [array] configuration is invalid: {}", e);
            std::process::exit(1);
        })
    });
    array.center_on_point(0.0, -MAX_HEIGHT * 0.5);

    Model {
        palette: config.palette(),
        config,
        scene: Scene::Converter,
        converter,
        array,
        osc_controller,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn initial_value(config: &Config) -> Decimal {
    Decimal::fraction(&config.converter.initial_value).unwrap_or_else(|e| {
        warn!("{}; starting the converter at 0", e);
        Decimal::zero()
    })
}

fn new_array(config: &Config) -> Result<SortableArray, ArrayError> {
    SortableArray::new(
        Vec2::ZERO,
        config.array.element_width,
        config.array.elements,
        config.array.max_value,
        config.array.seed,
        ArrayStyle::from_config(config),
    )
}

fn converter_origin(viewport: &Bounds) -> Vec2 {
    vec2(viewport.left() + 40.0, viewport.top() - viewport.h * 0.3)
}

fn new_converter(config: &Config, value: Decimal, viewport: Bounds) -> FractionConverter {
    let mut converter = FractionConverter::new(
        value,
        converter_origin(&viewport),
        viewport,
        StepStyle::from_config(config),
    );
    converter.set_step_limit(config.converter.limit());
    converter
}

fn restart_converter(model: &mut Model, value: Decimal, viewport: Bounds) {
    let limit = model.converter.step_limit();
    model.converter = new_converter(&model.config, value, viewport);
    model.converter.set_step_limit(limit);
    info!(%value, ?limit, "converter restarted");
}

fn viewport(app: &App) -> Bounds {
    let rect = app.window_rect();
    Bounds::centered(rect.w(), rect.h())
}

// ******************************* Input *******************************

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Tab => {
            model.scene = match model.scene {
                Scene::Converter => Scene::Array,
                Scene::Array => Scene::Converter,
            };
        }
        Key::Space => model.converter.io(InputEvent::Skip),
        Key::R => {
            let value = model.converter.value();
            restart_converter(model, value, viewport(app));
        }
        Key::Up => model.converter.raise_step_limit(),
        Key::Down => model.converter.lower_step_limit(),
        Key::N => model.array.next_solve_step(),
        Key::M => {
            let show = !model.array.markers_visible();
            model.array.show_markers(show);
        }
        Key::C => model.array = model.array.fresh_copy(),
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if model.scene == Scene::Array {
        model.array.touch_down(app.mouse.position(), MOUSE_POINTER, button);
    }
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    if model.scene == Scene::Array {
        model.array.touch_dragged(position, MOUSE_POINTER);
    }
}

fn mouse_released(app: &App, model: &mut Model, button: MouseButton) {
    if model.scene == Scene::Array {
        model.array.touch_up(app.mouse.position(), MOUSE_POINTER, button);
    }
}

fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    if model.scene != Scene::Array {
        return;
    }
    let pointer = touch_pointer(event.id);
    match event.phase {
        TouchPhase::Started => {
            model.array.touch_down(event.position, pointer, MouseButton::Left);
        }
        TouchPhase::Moved => {
            model.array.touch_dragged(event.position, pointer);
        }
        TouchPhase::Ended | TouchPhase::Cancelled => {
            model.array.touch_up(event.position, pointer, MouseButton::Left);
        }
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    let viewport = Bounds::centered(size.x, size.y);
    let origin = converter_origin(&viewport);
    model.converter.set_viewport(viewport);
    model.converter.set_position(origin.x, origin.y);
    model.array.center_on_point(0.0, -MAX_HEIGHT * 0.5);
}

// ******************************* Update *******************************

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    // Process OSC messages
    if let Some(osc) = model.osc_controller.as_mut() {
        osc.process_messages();
    }
    launch_commands(app, model);

    // only the visible scene advances
    match model.scene {
        Scene::Converter => model.converter.logic(),
        Scene::Array => model.array.logic(),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.palette.background);

    match model.scene {
        Scene::Converter => model.converter.draw(&draw),
        Scene::Array => model.array.draw(&draw),
    }

    if model.debug_flag {
        draw_debug_overlay(app, model, &draw);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        error!("failed to render frame: {:?}", e);
    }
}

fn draw_debug_overlay(app: &App, model: &Model, draw: &Draw) {
    // Draw (+,+) axes
    draw.line()
        .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
        .color(RED)
        .stroke_weight(1.0);
    draw.line()
        .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
        .color(BLUE)
        .stroke_weight(1.0);

    let rect = app.window_rect();
    let status = match model.scene {
        Scene::Converter => format!(
            "FPS: {:.1}\nsteps: {} limit: {}\ndigits: {}",
            model.fps,
            model.converter.step_count(),
            model
                .converter
                .step_limit()
                .map_or("none".to_string(), |l| l.to_string()),
            model.converter.digit_string().unwrap_or_else(|| "...".into()),
        ),
        Scene::Array => format!(
            "FPS: {:.1}\nvalues: {:?}\niteration: {} step: {}",
            model.fps,
            model.array.values(),
            model.array.iteration_index(),
            model.array.step_index(),
        ),
    };
    draw.text(&status)
        .x_y(rect.right() - 160.0, rect.top() - 50.0)
        .w_h(300.0, 80.0)
        .color(RED);
}

// ******************************* OSC Launcher *******************************

fn launch_commands(app: &App, model: &mut Model) {
    let commands = match model.osc_controller.as_mut() {
        Some(osc) => osc.take_commands(),
        None => return,
    };

    for command in commands {
        match command {
            OscCommand::SelectScene { name } => match name.as_str() {
                "converter" => model.scene = Scene::Converter,
                "array" => model.scene = Scene::Array,
                other => warn!("unknown scene '{}'", other),
            },
            OscCommand::ConverterStart { value } => match Decimal::fraction_from_f32(value) {
                Ok(value) => restart_converter(model, value, viewport(app)),
                Err(e) => warn!("/converter/start: {}", e),
            },
            OscCommand::ConverterLimit { limit } => model.converter.set_step_limit(limit),
            OscCommand::ConverterSkip => model.converter.io(InputEvent::Skip),
            OscCommand::ArraySwap { a, b } => {
                if !model.array.swap_indices(a, b) {
                    warn!(a, b, "/array/swap: indices out of range");
                }
            }
            OscCommand::ArrayStep => model.array.next_solve_step(),
            OscCommand::ArrayMarkers { show } => model.array.show_markers(show),
            OscCommand::ArrayReset => model.array = model.array.fresh_copy(),
        }
    }
}
