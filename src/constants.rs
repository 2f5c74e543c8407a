//! Built-in constants shared by the session and the WASM API

/// `localStorage` key holding the document text
pub const STORAGE_KEY: &str = "promark-content";

/// Basename for exported files (`document.md`, `document.txt`)
pub const EXPORT_BASENAME: &str = "document";

/// Document shown on first launch, when nothing has been saved yet
pub const WELCOME_DOCUMENT: &str = r#"# Welcome to ProMark Viewer 🚀

This is a **live preview** Markdown editor designed for speed and aesthetics.

## Key Features
- **Real-time Rendering:** Type on the left, see it on the right.
- **Syntax Highlighting:** Automatic coloring for code blocks.
- **File Support:** Upload `.md` files directly.
- **Export:** Print to PDF with a clean layout.

## Code Example

You can write code in any language, and it will look great:

```javascript
function sayHello(name) {
  const greeting = `Namaste, ${name}! 🙏`;
  console.log(greeting);
  return greeting;
}

sayHello('Mere Bhai');
```

## Tables

| Feature | Status | Priority |
| :--- | :---: | ---: |
| Live Preview | ✅ Ready | High |
| PDF Export | ✅ Ready | Medium |
| Dark Mode | ✅ Ready | Low |

> "Clean code always looks like it was written by someone who cares." 
> — Robert C. Martin

Enjoy your writing session! 
"#;
