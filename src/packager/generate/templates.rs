//! Embedded templates for the generated package files.

/// README.md template.
pub const README_TEMPLATE: &str = r#"# {{package_name}}

{{description}}

Generated font package for the {{family}} family.

## Fonts

| Font | Family | Style | Weight |
|------|--------|-------|--------|
{{#each fonts}}| {{this.id}} | {{this.family}} | {{this.style}} | {{this.weight}} |
{{/each}}
## Subsets

Each font ships with per-locale subsets in sibling directories under
`fonts/`:

{{#each subsets}}- `{{this}}`
{{/each}}
## Usage

```
npm install {{package_name}}
```

```css
@font-face {
  font-family: "{{family}}";
  src: url("fonts/default/{{sample_font}}.woff2") format("woff2"),
       url("fonts/default/{{sample_font}}.woff") format("woff"),
       url("fonts/default/{{sample_font}}.ttf") format("truetype");
}
```

## License

Distributed under the {{license}} license. See the LICENSE file.
"#;

/// index.js template.
pub const INDEX_JS_TEMPLATE: &str = r#"/* Generated by fontpack. Do not edit. */

module.exports = {
  name: "{{package_name}}",
  version: "{{version}}",
  root: __dirname,
  fonts: [
{{#each fonts}}    "{{this}}",
{{/each}}  ],
  aliases: {
{{#each aliases}}    "{{@key}}": "{{this}}",
{{/each}}  },
  subsets: [
{{#each subsets}}    "{{this}}",
{{/each}}  ]
};
"#;
