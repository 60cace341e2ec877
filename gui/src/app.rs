use ascii_aig::config::{MAX_SCALE, MIN_SCALE};
use ascii_aig::loader::{IMAGE_EXTENSIONS, scale_image};
use ascii_aig::output::{output_path, write_lines};
use ascii_aig::{AsciiImage, CharacterRamp, ConversionConfig, Interpolation, Rounding, convert};
use eframe::egui;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Which character ramp the user picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RampChoice {
    Depth10,
    Depth70,
    Custom,
}

/// Main application state for the ASCII image generator GUI
pub struct AsciiApp {
    /// Source image file
    source_path: Option<PathBuf>,
    /// Decoded source image, unscaled
    input_image: Option<RgbaImage>,
    /// Last conversion result
    output: Option<AsciiImage>,
    /// Conversion parameters
    config: ConversionConfig,

    /// Selected ramp and the text of the custom ramp field
    ramp_choice: RampChoice,
    custom_ramp: String,

    /// Whether to automatically reconvert when parameters change
    auto_convert: bool,
    /// Flag indicating parameters have changed and reconversion is needed
    needs_convert: bool,

    /// Last conversion time in milliseconds
    last_convert_time_ms: f64,
    /// Status line: (message, is_error)
    status: Option<(String, bool)>,
}

impl Default for AsciiApp {
    fn default() -> Self {
        Self {
            source_path: None,
            input_image: None,
            output: None,
            config: ConversionConfig::default(),
            ramp_choice: RampChoice::Depth10,
            custom_ramp: CharacterRamp::DEPTH_10.to_string(),
            auto_convert: true,
            needs_convert: false,
            last_convert_time_ms: 0.0,
            status: None,
        }
    }
}

impl AsciiApp {
    /// Create a new application
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn set_error(&mut self, message: String) {
        log::error!("{}", message);
        self.status = Some((message, true));
    }

    fn set_info(&mut self, message: String) {
        self.status = Some((message, false));
    }

    /// Load an image from file path
    pub fn load_image(&mut self, path: &Path) {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                log::info!("Opened {} ({}x{})", path.display(), rgba.width(), rgba.height());
                self.input_image = Some(rgba);
                self.source_path = Some(path.to_path_buf());
                self.output = None;
                self.needs_convert = true;
                self.status = None;
            }
            Err(e) => {
                self.set_error(format!("Could not load image from file: {}", e));
            }
        }
    }

    /// Write the output next to the source image, under a free `.txt` name
    fn save_next_to_source(&mut self) {
        let Some(source) = self.source_path.clone() else {
            self.set_error("No image file was chosen.".to_string());
            return;
        };
        let target = output_path(&source);
        self.save_output(&target);
    }

    /// Write the output to the given path
    fn save_output(&mut self, path: &Path) {
        let Some(output) = &self.output else {
            self.set_error("No ASCII output to save".to_string());
            return;
        };
        match write_lines(output.lines(), path) {
            Ok(()) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.set_info(format!(
                    "The image file has been converted to ASCII art.\nFile: {}",
                    name
                ));
            }
            Err(e) => self.set_error(format!("Could not write to output file: {}", e)),
        }
    }

    /// Sync `config.ramp` with the ramp selection
    fn apply_ramp_choice(&mut self) -> Result<(), String> {
        self.config.ramp = match self.ramp_choice {
            RampChoice::Depth10 => CharacterRamp::DEPTH_10,
            RampChoice::Depth70 => CharacterRamp::DEPTH_70,
            RampChoice::Custom => {
                CharacterRamp::new(&self.custom_ramp).map_err(|e| e.to_string())?
            }
        };
        Ok(())
    }

    /// Convert the input image with the current configuration
    fn convert(&mut self) {
        let Some(input) = &self.input_image else {
            return;
        };
        let start = Instant::now();

        if let Err(e) = self.config.validate() {
            self.needs_convert = false;
            self.set_error(format!("Invalid config: {}", e));
            return;
        }

        let scaled = scale_image(
            input,
            self.config.scale_x,
            self.config.scale_y,
            self.config.interpolation,
        );
        let result = convert(Some(&scaled), &self.config.ramp, self.config.rounding);
        self.last_convert_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.needs_convert = false;

        match result {
            Ok(Some(ascii)) => {
                self.output = Some(ascii);
                self.status = None;
            }
            Ok(None) => {
                self.output = None;
                self.set_error("Could not convert image to ASCII characters.".to_string());
            }
            Err(e) => {
                self.output = None;
                self.set_error(format!("Conversion failed: {}", e));
            }
        }
    }

    /// Render the control panel UI
    fn render_controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        ui.heading("Controls");
        ui.separator();

        // Scaling settings
        ui.collapsing("Scaling", |ui| {
            ui.horizontal(|ui| {
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.config.scale_x, MIN_SCALE..=MAX_SCALE)
                            .logarithmic(true)
                            .text("Width"),
                    )
                    .on_hover_text("Horizontal scaling factor")
                    .changed();

                if ui.button("Reset").clicked() {
                    self.config.reset_scale_x();
                    changed = true;
                }
            });

            ui.horizontal(|ui| {
                changed |= ui
                    .add(
                        egui::Slider::new(&mut self.config.scale_y, MIN_SCALE..=MAX_SCALE)
                            .logarithmic(true)
                            .text("Height"),
                    )
                    .on_hover_text("Vertical scaling factor")
                    .changed();

                if ui.button("Reset").clicked() {
                    self.config.reset_scale_y();
                    changed = true;
                }
            });

            ui.horizontal(|ui| {
                if ui
                    .button("Half height")
                    .on_hover_text("Height = half the width, for characters twice as tall as wide")
                    .clicked()
                {
                    self.config.half_height();
                    changed = true;
                }

                if ui
                    .button("Proportional")
                    .on_hover_text("Height = width")
                    .clicked()
                {
                    self.config.proportional();
                    changed = true;
                }
            });

            ui.add_space(4.0);
            ui.label("Interpolation");
            for interpolation in Interpolation::ALL {
                changed |= ui
                    .radio_value(
                        &mut self.config.interpolation,
                        interpolation,
                        interpolation.to_string(),
                    )
                    .changed();
            }
        });

        ui.add_space(8.0);

        // Character mapping settings
        ui.collapsing("Characters", |ui| {
            ui.label("Rounding");
            for rounding in Rounding::ALL {
                changed |= ui
                    .radio_value(&mut self.config.rounding, rounding, rounding.to_string())
                    .changed();
            }

            ui.add_space(4.0);
            ui.label("Character ramp");
            let mut ramp_changed = false;
            ramp_changed |= ui
                .radio_value(&mut self.ramp_choice, RampChoice::Depth10, "10 characters")
                .changed();
            ramp_changed |= ui
                .radio_value(&mut self.ramp_choice, RampChoice::Depth70, "70 characters")
                .changed();
            ramp_changed |= ui
                .radio_value(&mut self.ramp_choice, RampChoice::Custom, "Custom")
                .changed();

            ui.add_enabled_ui(self.ramp_choice == RampChoice::Custom, |ui| {
                ramp_changed |= ui
                    .text_edit_singleline(&mut self.custom_ramp)
                    .on_hover_text("Densest character first")
                    .changed();
            });

            if ramp_changed {
                match self.apply_ramp_choice() {
                    Ok(()) => changed = true,
                    Err(e) => self.set_error(e),
                }
            }
        });

        ui.add_space(16.0);
        ui.separator();

        // Auto-convert toggle
        ui.checkbox(&mut self.auto_convert, "Auto-convert")
            .on_hover_text("Automatically reconvert when parameters change");

        // Manual convert button
        ui.add_enabled_ui(self.input_image.is_some(), |ui| {
            if ui.button("Convert").clicked() {
                self.convert();
            }
        });

        // Show conversion time
        if self.last_convert_time_ms > 0.0 {
            ui.label(format!("Last conversion: {:.1} ms", self.last_convert_time_ms));
        }

        changed
    }

    /// Display the ASCII output (standalone helper function)
    fn display_output(ui: &mut egui::Ui, output: Option<&AsciiImage>, source: Option<&Path>) {
        ui.vertical(|ui| {
            ui.heading("ASCII Output");

            match output {
                Some(ascii) => {
                    ui.label(format!(
                        "{}x{} characters{}",
                        ascii.width(),
                        ascii.height(),
                        source
                            .map(|p| format!(" from {}", p.display()))
                            .unwrap_or_default()
                    ));
                    ui.separator();

                    egui::ScrollArea::both()
                        .auto_shrink([false, false])
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(egui::RichText::new(ascii.to_string()).monospace())
                                    .wrap_mode(egui::TextWrapMode::Extend),
                            );
                        });
                }
                None => {
                    ui.label("No image converted");
                }
            }
        });
    }
}

impl eframe::App for AsciiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .set_title("ASCII Image Generator")
                            .add_filter("Image file", &IMAGE_EXTENSIONS)
                            .pick_file()
                        {
                            self.load_image(&path);
                        }
                        ui.close();
                    }

                    if ui.button("Save Text").clicked() {
                        self.save_next_to_source();
                        ui.close();
                    }

                    if ui.button("Save Text As...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Text", &["txt"])
                            .save_file()
                        {
                            self.save_output(&path);
                        }
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.set_info(
                            "ASCII Image Generator\nGamma-correct grayscale to character ramps\n\nBuilt with Rust + egui".to_string(),
                        );
                        ui.close();
                    }
                });
            });
        });

        // Left panel: Controls
        egui::SidePanel::left("control_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let changed = self.render_controls(ui);

                    if changed {
                        self.needs_convert = true;
                    }
                });
            });

        // Central panel: ASCII display
        egui::CentralPanel::default().show(ctx, |ui| {
            // Show status message if any
            if let Some((msg, is_error)) = self.status.clone() {
                if is_error {
                    ui.colored_label(egui::Color32::RED, msg);
                } else {
                    ui.label(msg);
                }
                if ui.button("Dismiss").clicked() {
                    self.status = None;
                }
                ui.separator();
            }

            // Auto-convert if needed
            if self.auto_convert && self.needs_convert && self.input_image.is_some() {
                self.convert();
            }

            Self::display_output(ui, self.output.as_ref(), self.source_path.as_deref());
        });
    }
}
