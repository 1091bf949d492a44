// Entry page template
// Placeholders are filled in by the default renderer; the UI bundle files it
// references are served by the asset service under the same prefix.

pub(super) const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>API Explorer</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="stylesheet" type="text/css" href="./swagger-ui.css" />
  <link rel="icon" type="image/png" href="./favicon-32x32.png" sizes="32x32" />
  <link rel="icon" type="image/png" href="./favicon-16x16.png" sizes="16x16" />
  <style>
    html {
      box-sizing: border-box;
      overflow-y: scroll;
    }
    *, *:before, *:after {
      box-sizing: inherit;
    }
    body {
      margin: 0;
      background: #fafafa;
    }
  </style>
</head>

<body>
<div id="{{DOM_ID}}"></div>

<script src="./swagger-ui-bundle.js" charset="UTF-8"></script>
<script src="./swagger-ui-standalone-preset.js" charset="UTF-8"></script>
<script>
window.onload = function() {
  {{BEFORE_SCRIPT}}
  const ui = SwaggerUIBundle({
    url: {{URL}},
    deepLinking: {{DEEP_LINKING}},
    docExpansion: {{DOC_EXPANSION}},
    dom_id: {{DOM_ID_SELECTOR}},
    persistAuthorization: {{PERSIST_AUTHORIZATION}},
    validatorUrl: null,
    presets: [
      SwaggerUIBundle.presets.apis,
      SwaggerUIStandalonePreset
    ],
    plugins: [
      SwaggerUIBundle.plugins.DownloadUrl{{PLUGINS}}
    ],
{{UI_CONFIG}}    layout: "StandaloneLayout"
  })

  window.ui = ui
  {{AFTER_SCRIPT}}
}
</script>
</body>
</html>
"#;
