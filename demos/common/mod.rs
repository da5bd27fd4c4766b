//! eframe app shared by the triangle demos; only the shader source differs

use eframe::{egui, egui_glow, glow};

use egui::mutex::Mutex;
use std::sync::Arc;

use glow_triangle::ShaderSource;

pub fn run(title: &str, source: ShaderSource) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(MyApp::new(cc, &source)))),
    )
}

struct MyApp {
    /// Behind an `Arc<Mutex<…>>` so we can pass it to [`egui::PaintCallback`] and paint later.
    drawer: Arc<Mutex<glow_triangle::drawer_triangle::Drawer>>,
}

impl MyApp {
    fn new(cc: &eframe::CreationContext<'_>, source: &ShaderSource) -> Self {
        let gl = cc
            .gl
            .as_ref()
            .expect("You need to run eframe with the glow backend");
        let mut drawer = glow_triangle::drawer_triangle::Drawer::new();
        drawer.compile_shader(gl, source);
        drawer.set_vtx2xy(gl, &glow_triangle::drawer_triangle::TRIANGLE_VTX2XY);
        Self {
            drawer: Arc::new(Mutex::new(drawer)),
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style()).show(ui, |ui| {
                self.custom_painting(ui);
            });
        });
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.drawer.lock().destroy(gl);
        }
    }
}

impl MyApp {
    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        ui.allocate_rect(rect, egui::Sense::hover());
        let drawer = self.drawer.clone();
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                drawer.lock().paint(painter.gl());
            })),
        };
        ui.painter().add(callback);
    }
}
