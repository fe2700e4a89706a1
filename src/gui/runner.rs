//! GUI runner - launches the CodeQuest application window

use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::info;

use super::app::CodeQuestApp;

/// Run the GUI application
pub fn run_gui() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = CodeQuestApp::new(Instant::now());

    eframe::run_native(
        "CodeQuest",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Configure fonts with system fallbacks for Unicode symbols and emojis
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    // Platform-specific font configurations
    // Each entry: (name, path) - will be tried in order
    #[cfg(target_os = "macos")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
        ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
        ("segoe", "C:\\Windows\\Fonts\\segoeui.ttf"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf"),
        ("symbols_alt", "/usr/share/fonts/truetype/noto/NotoSansSymbols-Regular.ttf"),
        ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ];

    // Load all available fallback fonts
    for (name, path) in font_fallbacks {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert((*name).to_owned(), FontData::from_owned(font_data).into());

            if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
                family.push((*name).to_owned());
            }
            if let Some(family) = fonts.families.get_mut(&FontFamily::Monospace) {
                family.push((*name).to_owned());
            }

            info!("[codequest] Loaded fallback font '{}' from: {}", name, path);
        }
    }

    ctx.set_fonts(fonts);
}
