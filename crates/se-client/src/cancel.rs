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

//! Cooperative cancellation of in-flight calls

use se_core::{Error, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Drive `call` until it completes or `token` is cancelled.
///
/// A cancelled call is reported as [`Error::Cancelled`], never as a result.
/// Cancelling drops only this call's future; other calls sharing the client's
/// connection pool are unaffected.
///
/// ```rust,no_run
/// # use se_client::{run_cancellable, AsyncMonitoringClient};
/// # use tokio_util::sync::CancellationToken;
/// # async fn demo(client: AsyncMonitoringClient) -> se_core::Result<()> {
/// let token = CancellationToken::new();
/// let flow = run_cancellable(&token, client.current_power_flow(1001)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_cancellable<T, F>(token: &CancellationToken, call: F) -> Result<T>
where
  F: Future<Output = Result<T>>,
{
  tokio::select! {
    biased;
    _ = token.cancelled() => {
      debug!("Request cancelled by caller");
      Err(Error::Cancelled)
    }
    result = call => result,
  }
}
