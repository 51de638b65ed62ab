use std::process::ExitCode;

fn main() -> ExitCode {
    // Without the handler an interrupt still ends the process, just without
    // the cancellation notice.
    let _ = ctrlc::set_handler(|| {
        println!("\n\nDetection cancelled by user.");
        std::process::exit(0);
    });

    run()
}

#[cfg(target_os = "windows")]
fn run() -> ExitCode {
    use display_detect::{list_attached_displays, report::generate_report};

    println!("\n🖥️  Detecting connected displays...");

    let displays = match list_attached_displays() {
        Ok(displays) => displays,
        Err(err) => {
            println!("\n❌ ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    if displays.is_empty() {
        println!("\n❌ ERROR: No displays detected!");
        println!("Make sure your monitors are connected and turned on.");
        return ExitCode::FAILURE;
    }

    println!("✅ Found {} display(s)", displays.len());

    print!("{}", generate_report(&displays));

    println!("Detection complete!");
    println!("\n💡 TIP: Use the Simple ID or Resolution for your folder names");
    println!("   The Simple ID is stable and unique for each monitor.\n");

    ExitCode::SUCCESS
}

#[cfg(not(target_os = "windows"))]
fn run() -> ExitCode {
    println!("❌ ERROR: The display enumeration capability is not available!");
    println!("\nThis tool reads the desktop configuration through the Windows");
    println!("display APIs and has to run on a Windows desktop session.");

    ExitCode::FAILURE
}
