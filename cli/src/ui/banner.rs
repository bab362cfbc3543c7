//! Banner and help printing.

/// Print the application banner.
pub fn print_banner() {
    println!("\n\x1b[1;36m╔══════════════════════════════════════╗\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m            \x1b[1mqrgen\x1b[0m                     \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m║\x1b[0m    QR codes from text, sized to fit  \x1b[1;36m║\x1b[0m");
    println!("\x1b[1;36m╚══════════════════════════════════════╝\x1b[0m\n");
}

/// Print the list of interactive commands.
pub fn print_help() {
    println!("\x1b[1mCommands:\x1b[0m");
    println!("  set <text>    text or link to encode");
    println!("  paste         take the text from the clipboard");
    println!("  gen           generate the QR code");
    println!("  + / -         change the size by one step");
    println!("  save [path]   save the QR code as PNG");
    println!("  clear         clear the text");
    println!("  about         about qrgen");
    println!("  quit          exit and remove the working file\n");
}
