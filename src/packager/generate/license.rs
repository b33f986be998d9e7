//! LICENSE generation.

use crate::packager::error::{ErrorExt, Result};
use crate::packager::settings::Config;
use chrono::Datelike;

/// A known license and its standard notice text.
struct LicenseNotice {
    id: &'static str,
    notice: &'static str,
}

/// Notices for the licenses fonts usually ship under.
const LICENSES: &[LicenseNotice] = &[
    LicenseNotice {
        id: "OFL-1.1",
        notice: "This Font Software is licensed under the SIL Open Font License,\n\
                 Version 1.1.\n\n\
                 This license is available with a FAQ at:\n\
                 https://openfontlicense.org\n",
    },
    LicenseNotice {
        id: "MIT",
        notice: "Permission is hereby granted, free of charge, to any person obtaining\n\
                 a copy of this software and associated documentation files (the\n\
                 \"Software\"), to deal in the Software without restriction, including\n\
                 without limitation the rights to use, copy, modify, merge, publish,\n\
                 distribute, sublicense, and/or sell copies of the Software, and to\n\
                 permit persons to whom the Software is furnished to do so, subject to\n\
                 the following conditions:\n\n\
                 The above copyright notice and this permission notice shall be\n\
                 included in all copies or substantial portions of the Software.\n\n\
                 THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,\n\
                 EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF\n\
                 MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND\n\
                 NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE\n\
                 LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION\n\
                 OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION\n\
                 WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.\n",
    },
    LicenseNotice {
        id: "Apache-2.0",
        notice: "Licensed under the Apache License, Version 2.0 (the \"License\");\n\
                 you may not use this file except in compliance with the License.\n\
                 You may obtain a copy of the License at\n\n\
                 \x20   http://www.apache.org/licenses/LICENSE-2.0\n\n\
                 Unless required by applicable law or agreed to in writing, software\n\
                 distributed under the License is distributed on an \"AS IS\" BASIS,\n\
                 WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or\n\
                 implied. See the License for the specific language governing\n\
                 permissions and limitations under the License.\n",
    },
];

/// Writes `LICENSE` into the package root.
///
/// Known SPDX ids get their standard notice text; anything else gets a
/// one-paragraph pointer naming the id.
pub async fn write(config: &Config) -> Result<()> {
    log::info!("generating LICENSE");

    let options = config.options();
    let year = chrono::Utc::now().year();
    let holder = options.author.as_deref().unwrap_or("the font authors");

    let mut body = format!("Copyright (c) {year} {holder}\n\n");
    match LICENSES.iter().find(|l| l.id == options.license) {
        Some(license) => body.push_str(license.notice),
        None => {
            log::warn!("no embedded notice for license {}", options.license);
            body.push_str(&format!(
                "The fonts in this package are distributed under the {} license.\n\
                 See https://spdx.org/licenses/ for the license text.\n",
                options.license
            ));
        }
    }

    let path = config.target_dir().join("LICENSE");
    tokio::fs::write(&path, body)
        .await
        .fs_context("writing LICENSE", &path)?;

    Ok(())
}
