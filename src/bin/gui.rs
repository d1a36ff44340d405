#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, io, path::Path, path::PathBuf};
use tracing::{error, warn};
use van_deemter_toolbox::{
    config,
    deemter::{terms, Analysis},
    export, i18n,
    i18n::keys,
    input::{Bound, InputSnapshot},
    summary,
    ui_cli::DEFAULT_EXPORT_FILE,
};

const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4f, 0x46, 0xe5);

#[derive(Parser)]
#[command(name = "van_deemter_toolbox")]
struct GuiArgs {
    /// Language (auto, en, de, ko)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// Path to the configuration file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = GuiArgs::parse();

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1200.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default_at(&args.config).unwrap_or_else(|e| {
        error!("config error, using defaults: {e}");
        config::Config::default()
    });
    eframe::run_native(
        "Van Deemter Toolbox",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, args.config, &args.lang))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!("icon {path} could not be decoded: {e}");
            return None;
        }
    };
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn slider_with_tip(ui: &mut egui::Ui, value: &mut f64, bound: &Bound, text: &str, tip: &str) {
    let slider = egui::Slider::new(value, bound.min..=bound.max)
        .step_by(bound.step)
        .text(text);
    ui.add(slider).on_hover_text(tip);
}

struct GuiApp {
    config: config::Config,
    config_path: PathBuf,
    tr: i18n::Translator,
    snapshot: InputSnapshot,
    show_terms: bool,
    show_settings: bool,
    show_help: bool,
    lang_input: String,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, config_path: PathBuf, cli_lang: &str) -> Self {
        let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
        let snapshot = config.bounds.clamp(&config.defaults);
        let lang_input = config.language.clone();
        Self {
            config,
            config_path,
            tr,
            snapshot,
            show_terms: false,
            show_settings: false,
            show_help: false,
            lang_input,
            status: None,
        }
    }

    /// 슬라이더 값을 설정 파일의 시작값으로 되돌린다.
    fn reset_inputs(&mut self) {
        self.snapshot = self.config.bounds.clamp(&self.config.defaults);
    }

    /// 매 프레임 호출된다. 슬라이더 스냅샷에서 결과를 새로 계산한다.
    fn current_analysis(&self) -> Result<Analysis, String> {
        let snapshot = self.config.bounds.clamp(&self.snapshot);
        Analysis::compute(&snapshot, &self.config.domain).map_err(|e| e.to_string())
    }

    fn export_csv(&mut self, analysis: &Analysis) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(DEFAULT_EXPORT_FILE)
            .save_file()
        else {
            return;
        };
        self.status = Some(
            match export::save_curve_csv(&path, &analysis.curve, &analysis.coefficients) {
                Ok(()) => self
                    .tr
                    .tf(keys::EXPORT_DONE, &[("path", path.display().to_string())]),
                Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
            },
        );
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.defaults = self.config.bounds.clamp(&self.snapshot);
        let lang = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&lang, self.config.language_pack_dir.as_deref());
        self.status = Some(match self.config.save_to(&self.config_path) {
            Ok(()) => self.tr.t(keys::GUI_SAVED).into_owned(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    /// 좌측 입력 패널.
    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str| tr.t(key).into_owned();
        let bounds = self.config.bounds;
        ui.heading(txt(keys::GUI_SIDEBAR_HEADING));
        ui.label(txt(keys::GUI_SIDEBAR_HINT));
        ui.add_space(8.0);
        let coeffs = &mut self.snapshot.coefficients;
        slider_with_tip(ui, &mut coeffs.a, &bounds.a, &txt(keys::SLIDER_A), &txt(keys::HELP_A));
        slider_with_tip(ui, &mut coeffs.b, &bounds.b, &txt(keys::SLIDER_B), &txt(keys::HELP_B));
        slider_with_tip(ui, &mut coeffs.c, &bounds.c, &txt(keys::SLIDER_C), &txt(keys::HELP_C));
        ui.separator();
        slider_with_tip(
            ui,
            &mut self.snapshot.flow_rate,
            &bounds.flow_rate,
            &txt(keys::SLIDER_U),
            &txt(keys::HELP_U),
        );
        ui.separator();
        ui.checkbox(&mut self.show_terms, txt(keys::GUI_SHOW_TERMS));
        if ui.button(txt(keys::GUI_RESET)).clicked() {
            self.reset_inputs();
        }
    }

    fn ui_plot(&self, ui: &mut egui::Ui, analysis: &Analysis) {
        let tr = &self.tr;
        let txt = |key: &str| tr.t(key).into_owned();
        let precision = self.config.precision;
        ui.heading(txt(keys::CHART_TITLE));
        Plot::new("van_deemter_plot")
            .legend(Legend::default())
            .x_axis_label(txt(keys::CHART_X))
            .y_axis_label(txt(keys::CHART_Y))
            .height(ui.available_height() * 0.6)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(analysis.curve.to_xy()))
                        .name(summary::equation_label(&analysis.coefficients))
                        .color(CURVE_COLOR)
                        .width(2.0),
                );
                if self.show_terms {
                    let parts: Vec<_> = analysis
                        .curve
                        .iter()
                        .filter_map(|p| terms(p.u, &analysis.coefficients).ok().map(|t| (p.u, t)))
                        .collect();
                    let series = [
                        (keys::LEGEND_TERM_A, parts.iter().map(|(u, t)| [*u, t.eddy]).collect::<Vec<_>>()),
                        (keys::LEGEND_TERM_B, parts.iter().map(|(u, t)| [*u, t.longitudinal]).collect()),
                        (keys::LEGEND_TERM_C, parts.iter().map(|(u, t)| [*u, t.mass_transfer]).collect()),
                    ];
                    for (key, points) in series {
                        plot_ui.line(Line::new(PlotPoints::from(points)).name(txt(key)).width(1.0));
                    }
                }
                plot_ui.points(
                    Points::new(vec![analysis.optimum.as_xy()])
                        .radius(6.0)
                        .color(egui::Color32::RED)
                        .name(summary::optimal_label(analysis, tr, precision)),
                );
                plot_ui.points(
                    Points::new(vec![analysis.selected.0.as_xy()])
                        .radius(6.0)
                        .color(egui::Color32::BLUE)
                        .name(summary::selected_label(analysis, tr, precision)),
                );
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = |key: &str| tr.t(key).into_owned();
        let analysis = self.current_analysis();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt(keys::GUI_TITLE));
                ui.separator();
                if let Ok(analysis) = &analysis {
                    if ui.button(txt(keys::GUI_EXPORT)).clicked() {
                        self.export_csv(analysis);
                    }
                }
                if ui.button(txt(keys::GUI_SETTINGS)).clicked() {
                    self.show_settings = true;
                }
                if ui.button(txt(keys::GUI_HELP)).clicked() {
                    self.show_help = true;
                }
                if let Some(msg) = &self.status {
                    ui.label(msg.as_str());
                }
            });
        });

        if self.show_settings {
            let mut open = true;
            let mut save = false;
            egui::Window::new(txt(keys::GUI_SETTINGS))
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(txt(keys::GUI_LANGUAGE));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut self.lang_input, "auto".into(), txt(keys::GUI_LANG_AUTO));
                            ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                            ui.selectable_value(&mut self.lang_input, "de".into(), "Deutsch");
                            ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                        });
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(txt(keys::GUI_PRECISION));
                        ui.add(
                            egui::DragValue::new(&mut self.config.precision)
                                .clamp_range(0..=config::MAX_PRECISION),
                        );
                    });
                    ui.separator();
                    save = ui.button(txt(keys::GUI_SAVE)).clicked();
                });
            if save {
                self.save_settings();
            }
            self.show_settings = open;
        }

        if self.show_help {
            egui::Window::new(txt(keys::GUI_HELP))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_help)
                .show(ctx, |ui| {
                    ui.heading(txt(keys::SUMMARY_EQUATION));
                    ui.separator();
                    for key in [keys::HELP_A, keys::HELP_B, keys::HELP_C, keys::HELP_U] {
                        ui.add(egui::Label::new(txt(key)).wrap(true));
                    }
                    ui.separator();
                    ui.add(egui::Label::new(txt(keys::GUI_GLOSSARY)).wrap(true));
                });
        }

        egui::SidePanel::left("inputs")
            .resizable(true)
            .min_width(220.0)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.ui_inputs(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new(txt(keys::GUI_SUBTITLE)).italics());
            match &analysis {
                Ok(analysis) => {
                    self.ui_plot(ui, analysis);
                    ui.separator();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.monospace(summary::render(analysis, &tr, self.config.precision));
                    });
                }
                Err(e) => {
                    ui.colored_label(egui::Color32::RED, format!("{}: {e}", txt(keys::ERROR_PREFIX)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use van_deemter_toolbox::deemter::Coefficients;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), PathBuf::from("unused.toml"), "en")
    }

    #[test]
    fn starts_from_configured_defaults() {
        let app = app();
        assert_eq!(app.snapshot, InputSnapshot::default());
        let analysis = app.current_analysis().unwrap();
        assert_eq!(analysis.curve.len(), 400);
    }

    #[test]
    fn out_of_range_sliders_are_clamped_before_computing() {
        let mut app = app();
        app.snapshot.flow_rate = 0.0;
        app.snapshot.coefficients = Coefficients::new(5.0, 0.1, 0.01);
        let analysis = app.current_analysis().unwrap();
        assert_eq!(analysis.selected.u(), 1.0);
        assert_eq!(analysis.coefficients.a, 2.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = app();
        app.snapshot.flow_rate = 120.0;
        app.reset_inputs();
        assert_eq!(app.snapshot.flow_rate, 50.0);
    }
}
