use plexus::{Backdrop, Mode};

fn main() {
    env_logger::init();

    // `plexus arena` starts in the dense variant; anything else is subtle.
    let mode = match std::env::args().nth(1).as_deref() {
        Some("arena") => Mode::Arena,
        _ => Mode::Subtle,
    };

    if let Err(e) = Backdrop::new().with_mode(mode).run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
