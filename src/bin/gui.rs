#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//! 슬라이더로 환경 조건을 조절하면 유도량 막대 차트가 즉시 갱신된다.

use eframe::{egui, App, Frame};
use evaporation_power_toolbox::{
    air::slope::{slope_kpa_per_k, SlopeInput},
    air::vapor_pressure::{
        clausius_clapeyron_kpa, saturation_vapor_pressure_kpa, VaporPressureMethod,
    },
    config, conversion,
    i18n,
    quantity::QuantityKind,
    store::{ParameterStore, SurfaceConditions},
    units::pressure::{convert_pressure, PressureUnit},
    units::temperature::{to_kelvin, TemperatureUnit},
    units::velocity::{to_meter_per_second, VelocityUnit},
    weather,
};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Evaporation Power Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["EvapPower.png", "icon.png", "assets/icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/malgun.ttf
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows 기준)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = [
            "malgun.ttf",
            "malgunsl.ttf",
            "malgunbd.ttf",
            "gulim.ttc",
            "batang.ttc",
        ];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

fn legend_toggle(ui: &mut egui::Ui, title: &str, body: &str, state: &mut bool) {
    ui.horizontal(|ui| {
        ui.checkbox(state, title);
    });
    if *state {
        ui.add(egui::Label::new(egui::RichText::new(body).small()).wrap(true));
    }
}

/// 축 최대값 대비 채움 비율. 유한하지 않은 값이나 0 이하 축은 0으로 처리한다.
fn bar_fraction(value: f64, axis_max: f64) -> f64 {
    if !value.is_finite() || axis_max <= 0.0 {
        return 0.0;
    }
    (value / axis_max).clamp(0.0, 1.0)
}

/// 고정 축 막대 차트 하나를 그린다. 유한하지 않은 값은 빈 막대 + "—"로 표시한다.
fn bar_chart(
    ui: &mut egui::Ui,
    label: &str,
    unit: &str,
    axis_max: f64,
    color: egui::Color32,
    value: f64,
) {
    ui.label(egui::RichText::new(label).strong());
    let desired = egui::vec2(ui.available_width().min(420.0), 26.0);
    let (rect, _response) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    let frac = bar_fraction(value, axis_max) as f32;
    if frac > 0.0 {
        let fill = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width() * frac, rect.height()));
        painter.rect_filled(fill, 4.0, color);
    }
    let text = if value.is_finite() {
        format!("{value:.2} {unit}")
    } else {
        "—".to_string()
    };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(14.0),
        ui.visuals().strong_text_color(),
    );
    ui.small(format!("0 ~ {axis_max:.0} {unit}"));
    ui.add_space(6.0);
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    show_formula_modal: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    apply_initial_view_size: bool,
    // 해설 토글
    show_legend_engine: bool,
    show_legend_vapor: bool,
    show_legend_weather: bool,
    // 엔진 탭: 슬라이더 상태(표시 단위 기준)와 파라미터 저장소
    store: ParameterStore,
    irradiance: f64,
    temp_value: f64,
    temp_unit: TemperatureUnit,
    wind_value: f64,
    wind_unit: VelocityUnit,
    rel_hum_pct: f64,
    rel_hum_wet_pct: f64,
    method: VaporPressureMethod,
    // 수증기압 비교 탭
    vp_temp_value: f64,
    vp_temp_unit: TemperatureUnit,
    vp_out_unit: PressureUnit,
    // 날씨 CSV 탭
    weather_path: String,
    weather_result: Option<String>,
    weather_error: Option<String>,
    // 단위 변환 탭
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
    // 설정
    ui_scale: f32,
    always_on_top: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Engine,
    VaporTable,
    Weather,
    UnitConv,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();

        let defaults = config.slider_defaults;
        let method = config.vapor_pressure_method;
        let conditions = SurfaceConditions {
            irradiance_w_per_m2: defaults.irradiance_w_per_m2,
            air_temperature_k: to_kelvin(defaults.air_temperature_c, TemperatureUnit::Celsius),
            wind_speed_m_per_s: defaults.wind_speed_m_per_s,
            relative_humidity_frac: defaults.relative_humidity_pct / 100.0,
        };
        let store =
            ParameterStore::with_conditions(conditions, method, defaults.rel_hum_wet_pct / 100.0);

        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config: config.clone(),
            tr,
            lang_input,
            lang_save_status: None,
            tab: Tab::Engine,
            show_formula_modal: false,
            show_settings_modal: false,
            show_help_modal: false,
            apply_initial_view_size: true,
            show_legend_engine: false,
            show_legend_vapor: false,
            show_legend_weather: false,
            store,
            irradiance: defaults.irradiance_w_per_m2,
            temp_value: defaults.air_temperature_c,
            temp_unit: config.default_units.temperature,
            wind_value: defaults.wind_speed_m_per_s,
            wind_unit: config.default_units.velocity,
            rel_hum_pct: defaults.relative_humidity_pct,
            rel_hum_wet_pct: defaults.rel_hum_wet_pct,
            method,
            vp_temp_value: defaults.air_temperature_c,
            vp_temp_unit: config.default_units.temperature,
            vp_out_unit: config.default_units.vapor_pressure,
            weather_path: "./weather-data.csv".into(),
            weather_result: None,
            weather_error: None,
            conv_kind: QuantityKind::Temperature,
            conv_value: 20.0,
            conv_from: "C".into(),
            conv_to: "K".into(),
            conv_result: None,
            ui_scale: 1.0,
            always_on_top: false,
            custom_font_path: String::new(),
            font_load_error: None,
        }
    }

    /// 현재 슬라이더 상태를 SI로 환산해 저장소를 갱신한다.
    fn sync_store(&mut self) {
        let conditions = SurfaceConditions {
            irradiance_w_per_m2: self.irradiance,
            air_temperature_k: to_kelvin(self.temp_value, self.temp_unit),
            wind_speed_m_per_s: to_meter_per_second(self.wind_value, self.wind_unit),
            relative_humidity_frac: self.rel_hum_pct / 100.0,
        };
        self.store.set_method(self.method);
        self.store.set_rel_hum_wet(self.rel_hum_wet_pct / 100.0);
        self.store.update(conditions);
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.nav.title", "Menu"));
        ui.separator();
        ui.selectable_value(&mut self.tab, Tab::Engine, txt("gui.nav.engine", "Engine power"));
        ui.selectable_value(
            &mut self.tab,
            Tab::VaporTable,
            txt("gui.nav.vapor", "Vapor pressure"),
        );
        ui.selectable_value(&mut self.tab, Tab::Weather, txt("gui.nav.weather", "Weather CSV"));
        ui.selectable_value(&mut self.tab, Tab::UnitConv, txt("gui.nav.unit_conv", "Unit converter"));
    }

    fn ui_engine(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.engine.title", "Evaporation engine power"));
        legend_toggle(
            ui,
            &txt("gui.engine.legend_title", "What am I looking at?"),
            &txt(
                "gui.engine.legend_body",
                "Saturation vapor pressure and its slope come from the selected formula; \
                 the Penman-type balance turns radiation, wind and humidity deficit into an \
                 evaporation rate, which sets the latent heat flux and the theoretical power \
                 of an evaporation-driven engine.",
            ),
            &mut self.show_legend_engine,
        );
        ui.separator();

        let mut changed = false;
        egui::Grid::new("engine_grid")
            .num_columns(3)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &txt("gui.engine.irradiance", "Irradiance"),
                    &txt("gui.engine.irradiance_tip", "Net radiation above the surface"),
                );
                changed |= ui
                    .add(egui::Slider::new(&mut self.irradiance, 0.0..=1200.0).suffix(" W/m²"))
                    .changed();
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.engine.temperature", "Air temperature"),
                    &txt("gui.engine.temperature_tip", "Mean air temperature"),
                );
                let range = temperature_slider_range(self.temp_unit);
                changed |= ui
                    .add(egui::Slider::new(&mut self.temp_value, range))
                    .changed();
                changed |= temperature_unit_combo(ui, "engine_temp_unit", &mut self.temp_unit);
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.engine.wind", "Wind speed"),
                    &txt("gui.engine.wind_tip", "Wind speed over the water surface"),
                );
                let range = velocity_slider_range(self.wind_unit);
                changed |= ui
                    .add(egui::Slider::new(&mut self.wind_value, range))
                    .changed();
                changed |= velocity_unit_combo(ui, "engine_wind_unit", &mut self.wind_unit);
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.engine.rel_hum", "Relative humidity"),
                    &txt("gui.engine.rel_hum_tip", "Ambient relative humidity"),
                );
                changed |= ui
                    .add(egui::Slider::new(&mut self.rel_hum_pct, 0.0..=100.0).suffix(" %"))
                    .changed();
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.engine.rel_hum_wet", "Saturated-zone humidity"),
                    &txt(
                        "gui.engine.rel_hum_wet_tip",
                        "Relative humidity right above the evaporating water",
                    ),
                );
                changed |= ui
                    .add(egui::Slider::new(&mut self.rel_hum_wet_pct, 50.0..=100.0).suffix(" %"))
                    .changed();
                ui.end_row();

                label_with_tip(
                    ui,
                    &txt("gui.engine.method", "Vapor pressure formula"),
                    &txt("gui.engine.method_tip", "Empirical saturation vapor pressure model"),
                );
                changed |= method_combo(ui, "engine_method", &mut self.method);
                ui.end_row();
            });

        if changed {
            self.sync_store();
        }

        let derived = self.store.derived();
        ui.separator();
        ui.label(format!(
            "{} {:.4} kPa/K",
            txt("gui.engine.slope", "Curve slope Δ:"),
            derived.slope_kpa_per_k
        ));
        ui.add_space(6.0);

        let axes = self.config.chart_axes;
        bar_chart(
            ui,
            &txt("gui.engine.chart_evaporation", "Evaporation rate"),
            "mm/day",
            axes.evaporation_max_mm_per_day,
            egui::Color32::from_rgb(92, 140, 250),
            derived.evaporation_rate_mm_per_day,
        );
        bar_chart(
            ui,
            &txt("gui.engine.chart_latent", "Latent energy flux"),
            "W/m²",
            axes.latent_max_w_per_m2,
            egui::Color32::from_rgb(250, 160, 70),
            derived.latent_energy_w_per_m2,
        );
        bar_chart(
            ui,
            &txt("gui.engine.chart_power", "Max engine power"),
            "W/m²",
            axes.power_max_w_per_m2,
            egui::Color32::from_rgb(110, 200, 120),
            derived.engine_power_w_per_m2,
        );
        if !derived.engine_power_w_per_m2.is_finite() {
            ui.colored_label(
                ui.visuals().warn_fg_color,
                txt(
                    "gui.engine.nonfinite",
                    "No valid power estimate for this humidity combination.",
                ),
            );
        }
    }

    fn ui_vapor_table(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.vapor.title", "Saturation vapor pressure"));
        legend_toggle(
            ui,
            &txt("gui.vapor.legend_title", "About the formulas"),
            &txt(
                "gui.vapor.legend_body",
                "Five empirical fits of e_s(T) over liquid water. They agree near the ice \
                 point and drift apart toward the edges of their fitted ranges. The \
                 Clausius-Clapeyron row is a boiling-point extrapolation shown for reference.",
            ),
            &mut self.show_legend_vapor,
        );
        ui.separator();

        ui.horizontal(|ui| {
            label_with_tip(
                ui,
                &txt("gui.vapor.temperature", "Temperature"),
                &txt("gui.vapor.temperature_tip", "Evaluation temperature"),
            );
            ui.add(egui::DragValue::new(&mut self.vp_temp_value).speed(0.5));
            temperature_unit_combo(ui, "vp_temp_unit", &mut self.vp_temp_unit);
            ui.separator();
            label_with_tip(
                ui,
                &txt("gui.vapor.out_unit", "Output unit"),
                &txt("gui.vapor.out_unit_tip", "Display unit for vapor pressure"),
            );
            pressure_unit_combo(ui, "vp_out_unit", &mut self.vp_out_unit);
        });

        let t_kelvin = to_kelvin(self.vp_temp_value, self.vp_temp_unit);
        let unit_label = pressure_unit_label(self.vp_out_unit);
        ui.add_space(6.0);
        egui::Grid::new("vapor_grid")
            .num_columns(2)
            .spacing([18.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong(txt("gui.vapor.col_method", "Method"));
                ui.strong(format!("e_s [{unit_label}]"));
                ui.end_row();
                for method in VaporPressureMethod::ALL {
                    let e_s = saturation_vapor_pressure_kpa(t_kelvin, method);
                    let shown = convert_pressure(e_s, PressureUnit::KiloPascal, self.vp_out_unit);
                    ui.label(method.as_code());
                    if shown.is_finite() {
                        ui.label(format!("{shown:.4}"));
                    } else {
                        ui.label("—");
                    }
                    ui.end_row();
                }
                let cc = convert_pressure(
                    clausius_clapeyron_kpa(t_kelvin),
                    PressureUnit::KiloPascal,
                    self.vp_out_unit,
                );
                ui.label(txt("gui.vapor.clausius", "clausius-clapeyron (ref.)"));
                ui.label(format!("{cc:.4}"));
                ui.end_row();
            });

        let mut slope_input = SlopeInput::at_temperature(t_kelvin);
        slope_input.method = self.method;
        ui.add_space(6.0);
        ui.label(format!(
            "{} {:.5} kPa/K ({})",
            txt("gui.vapor.slope", "Curve slope Δ:"),
            slope_kpa_per_k(slope_input),
            self.method.as_code()
        ));
    }

    fn ui_weather(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.weather.title", "Weather CSV analysis"));
        legend_toggle(
            ui,
            &txt("gui.weather.legend_title", "Expected file format"),
            &txt(
                "gui.weather.legend_body",
                "Open-Meteo style hourly export: two metadata rows (latitude/longitude), a \
                 blank row, then hourly rows with temperature (°C), relative humidity (%), \
                 wind speed (km/h) and terrestrial radiation (W/m²).",
            ),
            &mut self.show_legend_weather,
        );
        ui.separator();

        ui.horizontal(|ui| {
            label_with_tip(
                ui,
                &txt("gui.weather.path", "CSV path"),
                &txt("gui.weather.path_tip", "Hourly weather export to analyze"),
            );
            ui.text_edit_singleline(&mut self.weather_path);
            if ui.button(txt("gui.weather.browse", "Browse…")).clicked() {
                if let Some(picked) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                    self.weather_path = picked.display().to_string();
                }
            }
        });
        ui.horizontal(|ui| {
            label_with_tip(
                ui,
                &txt("gui.weather.method", "Formula"),
                &txt("gui.weather.method_tip", "Vapor pressure model used for the series"),
            );
            method_combo(ui, "weather_method", &mut self.method);
            if ui.button(txt("gui.weather.run", "Analyze")).clicked() {
                self.run_weather_analysis();
            }
        });

        if let Some(err) = &self.weather_error {
            ui.separator();
            ui.colored_label(ui.visuals().warn_fg_color, err);
        }
        if let Some(result) = &self.weather_result {
            ui.separator();
            for line in result.lines() {
                ui.label(line);
            }
        }
    }

    fn run_weather_analysis(&mut self) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        self.weather_error = None;
        self.weather_result = None;
        match weather::load_csv(Path::new(&self.weather_path)) {
            Ok(series) => {
                let derived = weather::compute_series(
                    &series,
                    self.method,
                    self.rel_hum_wet_pct / 100.0,
                );
                let summary = weather::summarize(&derived);
                let rolling = weather::rolling_weekly_mean(
                    &derived.iter().map(|d| d.power_w_per_m2).collect::<Vec<_>>(),
                );
                let rolling_peak = rolling.iter().cloned().fold(f64::NAN, f64::max);
                self.weather_result = Some(fill_template(
                    &txt(
                        "gui.weather.result",
                        "Site: ({lat}, {lon})\nRecords: {count}\nMean evaporation rate: {rate} mm/day\n\
                         Mean power: {mean_p} W/m²\nPeak power: {peak_p} W/m²\n\
                         Peak weekly mean power: {peak_week} W/m²\nTotal energy: {energy} J/m²",
                    ),
                    &[
                        ("lat", format!("{:.4}", series.latitude)),
                        ("lon", format!("{:.4}", series.longitude)),
                        ("count", format!("{}", summary.record_count)),
                        (
                            "rate",
                            format!("{:.2}", summary.mean_evaporation_rate_mm_per_day),
                        ),
                        ("mean_p", format!("{:.2}", summary.mean_power_w_per_m2)),
                        ("peak_p", format!("{:.2}", summary.peak_power_w_per_m2)),
                        ("peak_week", format!("{rolling_peak:.2}")),
                        ("energy", format!("{:.3e}", summary.total_energy_j_per_m2)),
                    ],
                ));
            }
            Err(e) => {
                self.weather_error = Some(format!("{e}"));
            }
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.heading(txt("gui.conv.title", "Unit converter"));
        ui.separator();
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.conv.kind", "Quantity"));
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(kind_label(self.conv_kind))
                    .show_ui(ui, |ui| {
                        for (k, label) in quantity_options() {
                            if ui
                                .selectable_value(&mut self.conv_kind, k, label)
                                .changed()
                            {
                                let (from, to) = default_units_for_kind(self.conv_kind);
                                self.conv_from = from.into();
                                self.conv_to = to.into();
                            }
                        }
                    });
                ui.end_row();

                ui.label(txt("gui.conv.value", "Value"));
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                ui.end_row();

                ui.label(txt("gui.conv.from", "From"));
                unit_combo(ui, &mut self.conv_from, unit_options(self.conv_kind));
                ui.end_row();

                ui.label(txt("gui.conv.to", "To"));
                unit_combo(ui, &mut self.conv_to, unit_options(self.conv_kind));
                ui.end_row();
            });
        if ui.button(txt("gui.conv.run", "Convert")).clicked() {
            match conversion::convert(self.conv_kind, self.conv_value, &self.conv_from, &self.conv_to)
            {
                Ok(v) => {
                    self.conv_result = Some(format!(
                        "{} {} = {:.6} {}",
                        self.conv_value, self.conv_from, v, self.conv_to
                    ));
                }
                Err(e) => {
                    self.conv_result = Some(format!("{e}"));
                }
            }
        }
        if let Some(result) = &self.conv_result {
            ui.separator();
            ui.label(result);
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.5).max(880.0), (screen.y * 0.6).max(640.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Evaporation Power Toolbox"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut font_path_to_load: Option<String> = None;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.default_method", "Default vapor pressure formula"));
                    let mut default_method = self.config.vapor_pressure_method;
                    if method_combo(ui, "settings_method", &mut default_method) {
                        self.config.vapor_pressure_method = default_method;
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.font_browse", "Browse…")).clicked() {
                            if let Some(picked) = FileDialog::new()
                                .add_filter("Font", &["ttf", "ttc"])
                                .pick_file()
                            {
                                self.custom_font_path = picked.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply")).clicked() {
                            font_path_to_load = Some(self.custom_font_path.clone());
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(ui.visuals().warn_fg_color, err);
                    }

                    ui.separator();
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(
                            &self.config.language,
                            self.config.language_pack_dir.as_deref(),
                        );
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status =
                                Some(txt("gui.settings.saved", "Saved.").to_string());
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }
                });
            if let Some(path) = font_path_to_load {
                match load_custom_font(ctx, &path) {
                    Ok(()) => self.font_load_error = None,
                    Err(e) => self.font_load_error = Some(e),
                }
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Interactive explorer for evaporation-driven engine power",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.8"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.sliders",
                        "- Engine tab: drag the sliders; every change recomputes the full chain.",
                    ));
                    ui.label(txt(
                        "gui.about.nonfinite",
                        "- A dash in a chart means the inputs give no valid estimate (e.g. 0 % humidity).",
                    ));
                    ui.label(txt(
                        "gui.about.weather",
                        "- Weather tab reads an Open-Meteo hourly CSV export.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.heading(txt(
                        "gui.formula.vapor",
                        "Saturation vapor pressure: Buck / Magnus / Tetens / Antoine / Goff-Gratch fits of e_s(T), all in kPa.",
                    ));
                    ui.label(txt(
                        "gui.formula.slope",
                        "Curve slope: Δ = L_v·e_s / (R_v·T²), with L_v = 2448 MJ/Mg and R_v = 461.5 J/(kg·K).",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.evaporation",
                        "Evaporation: E = (Δ·R_n + 2.6·c₁·L_v·ρ_w·γ·(1+0.54·u)·D_a) / (c₁·L_v·ρ_w·(Δ+γ)) in mm/day, D_a = (1−RH)·e_s.",
                    ));
                    ui.label(txt(
                        "gui.formula.latent",
                        "Latent flux: E·L_v·1000/86400 converts mm/day to W/m².",
                    ));
                    ui.separator();
                    ui.heading(txt(
                        "gui.formula.power",
                        "Engine power: P = c_t·E·R·T·ln(RH_wet/RH_air) in W/m²; non-finite when RH_air is 0 or the ratio is not positive.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(190.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Engine => self.ui_engine(ui),
                    Tab::VaporTable => self.ui_vapor_table(ui),
                    Tab::Weather => self.ui_weather(ui),
                    Tab::UnitConv => self.ui_unit_conv(ui),
                });
        });
    }
}

fn temperature_slider_range(unit: TemperatureUnit) -> std::ops::RangeInclusive<f64> {
    match unit {
        TemperatureUnit::Celsius => -40.0..=60.0,
        TemperatureUnit::Kelvin => 233.15..=333.15,
        TemperatureUnit::Fahrenheit => -40.0..=140.0,
    }
}

fn velocity_slider_range(unit: VelocityUnit) -> std::ops::RangeInclusive<f64> {
    match unit {
        VelocityUnit::MeterPerSecond => 0.0..=30.0,
        VelocityUnit::KilometerPerHour => 0.0..=108.0,
        VelocityUnit::MilePerHour => 0.0..=67.0,
    }
}

fn temperature_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut TemperatureUnit) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id)
        .selected_text(temperature_unit_label(*value))
        .show_ui(ui, |ui| {
            for unit in [
                TemperatureUnit::Celsius,
                TemperatureUnit::Kelvin,
                TemperatureUnit::Fahrenheit,
            ] {
                changed |= ui
                    .selectable_value(value, unit, temperature_unit_label(unit))
                    .changed();
            }
        });
    changed
}

fn velocity_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut VelocityUnit) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id)
        .selected_text(velocity_unit_label(*value))
        .show_ui(ui, |ui| {
            for unit in [
                VelocityUnit::MeterPerSecond,
                VelocityUnit::KilometerPerHour,
                VelocityUnit::MilePerHour,
            ] {
                changed |= ui
                    .selectable_value(value, unit, velocity_unit_label(unit))
                    .changed();
            }
        });
    changed
}

fn pressure_unit_combo(ui: &mut egui::Ui, id: &str, value: &mut PressureUnit) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id)
        .selected_text(pressure_unit_label(*value))
        .show_ui(ui, |ui| {
            for unit in [
                PressureUnit::KiloPascal,
                PressureUnit::HectoPascal,
                PressureUnit::Pascal,
                PressureUnit::MilliBar,
                PressureUnit::MmHg,
                PressureUnit::Atm,
            ] {
                changed |= ui
                    .selectable_value(value, unit, pressure_unit_label(unit))
                    .changed();
            }
        });
    changed
}

fn method_combo(ui: &mut egui::Ui, id: &str, value: &mut VaporPressureMethod) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(id)
        .selected_text(value.as_code())
        .show_ui(ui, |ui| {
            for method in VaporPressureMethod::ALL {
                changed |= ui
                    .selectable_value(value, method, method.as_code())
                    .changed();
            }
        });
    changed
}

fn temperature_unit_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Kelvin => "K",
        TemperatureUnit::Fahrenheit => "°F",
    }
}

fn velocity_unit_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::MeterPerSecond => "m/s",
        VelocityUnit::KilometerPerHour => "km/h",
        VelocityUnit::MilePerHour => "mph",
    }
}

fn pressure_unit_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::HectoPascal => "hPa",
        PressureUnit::Pascal => "Pa",
        PressureUnit::MilliBar => "mbar",
        PressureUnit::MmHg => "mmHg",
        PressureUnit::Atm => "atm",
    }
}

fn quantity_options() -> Vec<(QuantityKind, &'static str)> {
    vec![
        (QuantityKind::Temperature, "온도"),
        (QuantityKind::Velocity, "풍속"),
        (QuantityKind::Pressure, "압력"),
    ]
}

fn kind_label(kind: QuantityKind) -> &'static str {
    quantity_options()
        .into_iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, l)| l)
        .unwrap_or("미정")
}

fn default_units_for_kind(kind: QuantityKind) -> (&'static str, &'static str) {
    match kind {
        QuantityKind::Temperature => ("C", "K"),
        QuantityKind::Velocity => ("m/s", "km/h"),
        QuantityKind::Pressure => ("kPa", "mmHg"),
    }
}

fn unit_options(kind: QuantityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        QuantityKind::Temperature => &[
            ("Celsius (°C)", "C"),
            ("Kelvin (K)", "K"),
            ("Fahrenheit (°F)", "F"),
        ],
        QuantityKind::Velocity => &[("m/s", "m/s"), ("km/h", "km/h"), ("mph", "mph")],
        QuantityKind::Pressure => &[
            ("kPa", "kPa"),
            ("hPa", "hPa"),
            ("Pa", "Pa"),
            ("mbar", "mbar"),
            ("mmHg", "mmHg"),
            ("atm", "atm"),
        ],
    }
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[(&str, &str)]) {
    let current = options
        .iter()
        .find(|(_, c)| value.eq_ignore_ascii_case(c))
        .map(|(l, _)| *l)
        .unwrap_or(value.as_str());
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(current)
        .show_ui(ui, |ui| {
            for (label, code) in options {
                ui.selectable_value(value, code.to_string(), *label);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fraction_clamps_to_unit_interval() {
        assert_eq!(bar_fraction(-5.0, 30.0), 0.0);
        assert_eq!(bar_fraction(45.0, 30.0), 1.0);
        assert!((bar_fraction(15.0, 30.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn bar_fraction_handles_degenerate_values() {
        assert_eq!(bar_fraction(f64::NAN, 30.0), 0.0);
        assert_eq!(bar_fraction(f64::INFINITY, 30.0), 0.0);
        assert_eq!(bar_fraction(10.0, 0.0), 0.0);
    }

    #[test]
    fn slider_defaults_feed_the_store() {
        let app = GuiApp::new(config::Config::default());
        let conditions = app.store.conditions();
        assert!((conditions.irradiance_w_per_m2 - 500.0).abs() < 1e-9);
        assert!((conditions.air_temperature_k - 293.15).abs() < 1e-9);
        assert!((conditions.wind_speed_m_per_s - 4.0).abs() < 1e-9);
        assert!((conditions.relative_humidity_frac - 0.05).abs() < 1e-9);
        assert!(app.store.derived().evaporation_rate_mm_per_day > 0.0);
    }

    #[test]
    fn convert_temperature_roundtrip() {
        let out = conversion::convert(QuantityKind::Temperature, 20.0, "C", "K").unwrap();
        assert!((out - 293.15).abs() < 1e-9);
        let back = conversion::convert(QuantityKind::Temperature, out, "K", "C").unwrap();
        assert!((back - 20.0).abs() < 1e-9);
    }

    #[test]
    fn convert_vapor_pressure_to_mmhg() {
        let out = conversion::convert(QuantityKind::Pressure, 0.611, "kPa", "mmHg").unwrap();
        assert!((out - 4.5829).abs() < 1e-3, "out={out}");
    }
}
