#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=debug para ver las peticiones
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Test de repaso",
        options,
        Box::new(|cc| Ok(Box::new(quiz_session::QuizApp::new(cc)?))),
    )
}

// En web el punto de entrada es `start` (src/web.rs)
#[cfg(target_arch = "wasm32")]
fn main() {}
