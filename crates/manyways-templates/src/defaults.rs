//! Built-in fragments, written out by `manyways init`.

use crate::fragments::Fragment;

/// Default text of a fragment.
pub fn text(fragment: Fragment) -> &'static str {
    match fragment {
        Fragment::Page => PAGE_TEMPLATE,
        Fragment::Group => GROUP_TEMPLATE,
        Fragment::Entry => ENTRY_TEMPLATE,
        Fragment::TocEntry => TOC_ENTRY_TEMPLATE,
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Many ways to do it</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 72rem; margin: 0 auto; padding: 1rem; }
    table { border-collapse: collapse; width: 100%; }
    td { border-top: 1px solid #ddd; padding: 0.4rem; vertical-align: top; }
    td.chars { text-align: right; color: #777; }
    code { white-space: pre-wrap; }
  </style>
</head>
<body>
  <header>
    <h1>Many ways to do it</h1>
    <nav class="toc">
      <ul>
{{ toc }}
      </ul>
    </nav>
  </header>
  <main>
{{ content }}
  </main>
</body>
</html>
"##;

const GROUP_TEMPLATE: &str = r##"<section class="ways" id="{{ id }}">
  <h2><a href="#{{ id }}">{{ title }}</a></h2>
  <p class="task">{{ task }}</p>
  <table>
{{ content }}
  </table>
</section>"##;

const ENTRY_TEMPLATE: &str = r##"    <tr class="way">
      <td class="technology">{{ technology }}</td>
      <td class="command"><code>{{ command }}</code></td>
      <td class="chars">{{ char_count }}</td>
      <td class="comment">{{ comment }}</td>
    </tr>"##;

const TOC_ENTRY_TEMPLATE: &str = r##"        <li><a href="#{{ id }}">{{ title }}</a></li>"##;
