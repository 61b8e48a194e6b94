use std::{
    io::Write,
    process::{Command, Stdio},
};

/// Shares a page URL: the browser is the native share surface; when it cannot
/// be opened, the URL is copied to the clipboard instead. Returns the
/// confirmation message to display.
pub fn share_url(url: &str) -> Result<&'static str, String> {
    if webbrowser::open(url).is_ok() {
        return Ok("Opened share link in browser");
    }
    copy_to_clipboard(url).map(|_| "Link copied to clipboard!")
}

/// Copies text via the first available external clipboard tool.
fn copy_to_clipboard(text: &str) -> Result<(), String> {
    const TOOLS: [&[&str]; 4] = [
        &["pbcopy"],
        &["wl-copy"],
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ];

    for tool in TOOLS {
        let spawned = Command::new(tool[0])
            .args(&tool[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(_) => continue,
        };

        if let Some(stdin) = child.stdin.as_mut() {
            if stdin.write_all(text.as_bytes()).is_err() {
                continue;
            }
        }
        match child.wait() {
            Ok(status) if status.success() => return Ok(()),
            _ => continue,
        }
    }

    Err("no clipboard tool available".to_string())
}
