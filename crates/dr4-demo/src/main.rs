use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use dr4::{Color, Drawable, Event, KeyCode, KeyMods, Plugin, VAlign, Vec2f};
use dr4_winit::logging::{init_logging, LoggingConfig};

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let backend = dr4_winit::create_backend();
    log::info!("{} {}: {}", backend.name(), backend.version(), backend.description());

    let mut window = backend.create_window();
    window.set_title("dr4 demo");
    window.open()?;
    let started = window.time();
    window.start_text_input();

    let mut font = window.create_font();
    match FONT_PATHS.iter().map(Path::new).find(|p| p.exists()) {
        Some(path) => font.load_from_file(path)?,
        None => log::warn!("no system font found; text will not be drawn"),
    }

    let mut canvas = window.create_texture();

    let mut cursor = window.create_circle();
    cursor.set_radius(12.0);
    cursor.set_fill_color(Color::new(255, 200, 0, 200));
    cursor.set_border_color(Color::WHITE);
    cursor.set_border_thickness(2.0);

    let mut panel = window.create_rectangle();
    panel.set_pos(Vec2f::new(40.0, 40.0));
    panel.set_size(Vec2f::new(300.0, 120.0));
    panel.set_fill_color(Color::rgb(40, 44, 52));
    panel.set_border_color(Color::rgb(97, 175, 239));
    panel.set_border_thickness(-3.0);

    let mut trail = window.create_line();
    trail.set_color(Color::rgb(152, 195, 121));
    trail.set_thickness(3.0);

    let mut typed = String::new();
    let mut label = window.create_text();
    label.set_font(font.as_ref());
    label.set_font_size(24.0);
    label.set_valign(VAlign::Middle);
    label.set_pos(Vec2f::new(56.0, 100.0));
    label.set_text("type something");

    let mut last_click = Vec2f::new(360.0, 240.0);
    trail.set_start(last_click);

    'main: while window.is_open() {
        while let Some(event) = window.poll_event() {
            match event {
                Event::Quit => break 'main,
                Event::KeyDown(key) if key.sym == KeyCode::Escape => break 'main,
                Event::KeyDown(key) if key.sym == KeyCode::Backspace => {
                    typed.pop();
                    label.set_text(&typed);
                }
                Event::KeyDown(key) if key.sym == KeyCode::L && key.mods.contains(KeyMods::CTRL) => {
                    typed.clear();
                    label.set_text(&typed);
                }
                Event::Text(text) if !text.unicode.chars().any(char::is_control) => {
                    typed.push_str(&text.unicode);
                    label.set_text(&typed);
                }
                Event::MouseMove(m) => {
                    cursor.set_center(m.pos);
                    trail.set_end(m.pos);
                }
                Event::MouseDown(b) => {
                    last_click = b.pos;
                    trail.set_start(last_click);
                }
                Event::MouseWheel(w) => {
                    let r = (cursor.radius() + w.delta_y * 2.0).clamp(4.0, 80.0);
                    cursor.set_radius(r);
                }
                _ => {}
            }
        }

        canvas.clear(Color::rgb(24, 26, 31));
        panel.draw_on(canvas.as_mut());
        label.draw_on(canvas.as_mut());
        trail.draw_on(canvas.as_mut());
        cursor.draw_on(canvas.as_mut());

        window.clear(Color::BLACK);
        window.draw(canvas.as_ref());
        window.display();

        std::thread::sleep(FRAME);
    }

    window.close();
    log::info!("ran for {:.1}s", window.time() - started);
    Ok(())
}
