#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = larder_ui::run() {
        eprintln!("Larder failed: {err}");
        std::process::exit(1);
    }
}
