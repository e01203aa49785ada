//! HTML import.
//!
//! Conversion runs in two stages: [`lexer::tokenize`] turns markup into a flat
//! list of [`HtmlEvent`]s, and [`Converter`] folds those events into blocks.
//!
//! # Element Mapping Table
//!
//! | HTML                          | Result                                              |
//! |-------------------------------|-----------------------------------------------------|
//! | `<p>`                         | block, style `normal`                               |
//! | `<h1>`..`<h4>`                | block, style `h1`..`h4` (taken from the closing tag)|
//! | `<blockquote>`                | block, style `blockquote`                           |
//! | `<ul>` / `<ol>`               | sets list kind `bullet` / `number`, depth + 1       |
//! | `<li>`                        | block with `listItem` and `level`                   |
//! | `<strong>` / `<b>`            | mark `strong`                                       |
//! | `<em>` / `<i>`                | mark `em`                                           |
//! | `<a href>`                    | `link` mark definition plus a mark referencing it   |
//! | `<br>`                        | `"\n"` span                                         |
//! | `<img src alt>`               | image reference (not part of the text)              |
//! | anything else                 | ignored, text inside is kept                        |

pub mod converter;
pub mod entities;
pub mod events;
pub mod lexer;

pub use converter::Converter;
pub use events::HtmlEvent;
pub use lexer::tokenize;
