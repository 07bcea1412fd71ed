//! Project scaffolding: manifest, build config, type-check config, readme.

use serde::Serialize;

use crate::model::{AppInfo, WizardState};
use crate::naming::{nsid, package_name};

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: String,
    version: &'a str,
    description: String,
    main: &'a str,
    scripts: Scripts<'a>,
    author: &'a str,
    license: &'a str,
    #[serde(rename = "type")]
    module_type: &'a str,
    dependencies: Dependencies<'a>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DevDependencies<'a>,
}

#[derive(Serialize)]
struct Scripts<'a> {
    dev: &'a str,
    build: &'a str,
    preview: &'a str,
}

#[derive(Serialize)]
struct Dependencies<'a> {
    #[serde(rename = "@atproto/api")]
    api: &'a str,
    #[serde(rename = "@atproto/lexicon")]
    lexicon: &'a str,
    #[serde(rename = "@atproto/oauth-client-browser")]
    oauth_client_browser: &'a str,
}

#[derive(Serialize)]
struct DevDependencies<'a> {
    #[serde(rename = "@types/node")]
    types_node: &'a str,
    typescript: &'a str,
    vite: &'a str,
}

/// Generates package.json.
pub fn generate_package_json(app_info: &AppInfo) -> Result<String, serde_json::Error> {
    let description = if app_info.description.is_empty() {
        format!("{} - An AT Protocol application", app_info.app_name)
    } else {
        app_info.description.clone()
    };

    let manifest = PackageManifest {
        name: package_name(&app_info.app_name),
        version: "1.0.0",
        description,
        main: "index.js",
        scripts: Scripts {
            dev: "vite",
            build: "vite build",
            preview: "vite preview",
        },
        author: &app_info.author_name,
        license: "MIT",
        module_type: "module",
        dependencies: Dependencies {
            api: "^0.18.8",
            lexicon: "^0.5.1",
            oauth_client_browser: "^0.3.35",
        },
        dev_dependencies: DevDependencies {
            types_node: "^25.0.3",
            typescript: "^5.9.3",
            vite: "^7.2.4",
        },
    };

    let mut output = serde_json::to_string_pretty(&manifest)?;
    output.push('\n');
    Ok(output)
}

/// Generates vite.config.ts.
pub fn generate_vite_config() -> &'static str {
    r#"import { defineConfig } from 'vite';

export default defineConfig({
  server: {
    port: 8080,
    host: '0.0.0.0',
  },
  build: {
    outDir: 'dist',
  },
  publicDir: 'public',
});
"#
}

/// Generates tsconfig.json for the project.
pub fn generate_tsconfig() -> &'static str {
    r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "module": "ESNext",
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "moduleResolution": "bundler",
    "strict": true,
    "skipLibCheck": true,
    "noEmit": true,
    "resolveJsonModule": true,
    "isolatedModules": true
  },
  "include": ["**/*.ts"],
  "exclude": ["node_modules", "dist"]
}
"#
}

/// Generates a README for the generated project.
pub fn generate_readme(state: &WizardState) -> String {
    let app_info = &state.app_info;
    let domain = app_info.domain.as_str();
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", app_info.app_name));
    output.push_str(&format!(
        "{}\n\n",
        non_empty_or(&app_info.description, "An AT Protocol application")
    ));
    output.push_str(&format!(
        "## Author\n{}\n\n",
        non_empty_or(&app_info.author_name, "Unknown")
    ));

    output.push_str(
        r#"## Getting Started

1. Install dependencies:
   ```bash
   npm install
   ```

2. Start the development server:
   ```bash
   npm run dev
   ```

3. Open http://localhost:8080 in your browser

4. Sign in with your AT Protocol handle (e.g., yourname.bsky.social)

## Record Types

"#,
    );

    for record in &state.record_types {
        output.push_str(&format!("### {}\n", record.name));
        output.push_str(&format!(
            "{}\n\n",
            non_empty_or(&record.description, "No description")
        ));
        output.push_str("**Fields:**\n");
        for field in &record.fields {
            let required = if field.required { " - Required" } else { "" };
            output.push_str(&format!("- `{}` ({}){}\n", field.name, field.typ, required));
        }
        output.push('\n');
    }

    output.push_str("## Lexicons\n\n");
    for record in &state.record_types {
        output.push_str(&format!("- `{}` (record)\n", nsid(domain, &record.name)));
    }
    for query in &state.query_methods {
        output.push_str(&format!("- `{}` (query)\n", nsid(domain, &query.name)));
    }
    for procedure in &state.procedure_methods {
        output.push_str(&format!("- `{}` (procedure)\n", nsid(domain, &procedure.name)));
    }

    output.push_str(
        r#"
## Building for Production

```bash
npm run build
```

The built files will be in the `dist/` directory.
"#,
    );

    output
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
