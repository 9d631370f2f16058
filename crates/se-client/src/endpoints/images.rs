/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Image endpoints. These answer with image bytes rather than JSON.

use crate::request::ApiRequest;
use se_core::types::sites::required_segment;
use se_core::{Endpoint, Result, SiteImageOptions};

/// `site/{id}/siteImage/{name}`
pub fn site_image(site_id: u64, name: &str, options: &SiteImageOptions) -> Result<ApiRequest> {
  let name = required_segment("name", name)?;
  Ok(ApiRequest::for_endpoint(&Endpoint::SiteImage { site_id, name }).params(options.pairs()))
}

/// `site/{id}/installerImage/{name}`
pub fn installer_image(site_id: u64, name: &str) -> Result<ApiRequest> {
  let name = required_segment("name", name)?;
  Ok(ApiRequest::for_endpoint(&Endpoint::InstallerImage { site_id, name }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_site_image_options() {
    let options = SiteImageOptions { max_height: Some(480), ..Default::default() };
    let request = site_image(11, "roof.jpg", &options).unwrap();
    assert_eq!(request.path(), "site/11/siteImage/roof.jpg");
    assert_eq!(request.query()["maxHeight"], "480");
  }

  #[test]
  fn test_installer_image_requires_name() {
    assert!(installer_image(11, "").is_err());
    assert_eq!(installer_image(11, "logo.png").unwrap().path(), "site/11/installerImage/logo.png");
  }
}
