//! Markdown documentation printed by the `doc` subcommand.

const OVERVIEW: &str = r##"Replace colors in PNG, JPEG and GIF images from the command line.

## Features

- Remove every color except black and white
- Remove one specific color given as `R,G,B` or `#RRGGBB`
- Match within a tolerance (largest per-channel difference, default 30)
- Replace removed colors with any color (default white)
- Keep the transparency of every pixel
- Process every frame of an animated GIF

## Usage Examples

1. Remove all colors except black and white:
   ```bash
   color-remover input.png output.png
   ```

2. Remove a specific color:
   ```bash
   color-remover input.jpg output.jpg --target-color "255,0,0"
   color-remover input.jpg output.jpg --target-color "#ff0000"
   ```

3. Replace with a custom color:
   ```bash
   color-remover input.gif output.gif --replacement-color "#00ff00"
   ```

4. Only exact black and white survive:
   ```bash
   color-remover input.png output.png --bw-only --tolerance 0
   ```

## Installation

```bash
cargo install --path .
```

## License

MIT
"##;

/// Render the tool's documentation as Markdown.
pub fn render_doc(title: &str, toc: bool) -> String {
    let mut parts = vec![format!("# {title}\n")];

    if toc {
        parts.push(
            [
                "## Table of Contents\n",
                "- [Features](#features)",
                "- [Usage Examples](#usage-examples)",
                "- [Installation](#installation)",
                "- [License](#license)\n",
            ]
            .join("\n"),
        );
    }

    parts.push(OVERVIEW.to_string());
    parts.join("\n")
}
