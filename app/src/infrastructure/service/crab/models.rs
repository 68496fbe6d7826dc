use domain::{
    model::vo::{HttpFailure, SubmitReceipt},
    service::SubmitError,
};
use regex::Regex;

/// Reads what `crab submit` printed.
pub struct OutputParser {
    task_name: Regex,
    project_dir: Regex,
    status_line: Regex,
    header_line: Regex,
    answered: Regex,
}

impl OutputParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            task_name: Regex::new(r"(?m)^\s*Task name:\s*(\S+)")?,
            project_dir: Regex::new(r"(?m)^\s*Project dir:\s*(\S+)")?,
            status_line: Regex::new(r"^\s*HTTP/\d(?:\.\d)?\s+(\d{3})(?:\s+(.*?))?\s*$")?,
            header_line: Regex::new(r"^\s*([A-Za-z0-9][A-Za-z0-9-]*):\s?(.*?)\s*$")?,
            answered: Regex::new(r"(?m)^.*Server answered with:\s*(.*?)\s*$")?,
        })
    }

    /// Turn the output of `crab submit` into a receipt or a submission error.
    ///
    /// An HTTP rejection is recognised from the output alone because the client
    /// does not always exit with a non-zero status when the server says no.
    pub fn classify(
        &self,
        success: bool,
        stdout: &str,
        stderr: &str,
    ) -> Result<SubmitReceipt, SubmitError> {
        let output = format!("{stdout}\n{stderr}");
        if let Some(failure) = self.parse_http_failure(&output) {
            return Err(SubmitError::Http(failure));
        }
        if !success {
            let detail = last_lines(if stderr.trim().is_empty() { stdout } else { stderr }, 5);
            return Err(SubmitError::Other(anyhow::anyhow!(
                "crab submit exited with an error: {detail}"
            )));
        }
        Ok(self.parse_receipt(stdout))
    }

    pub fn parse_receipt(&self, stdout: &str) -> SubmitReceipt {
        let capture = |re: &Regex| re.captures(stdout).map(|c| c[1].to_owned());
        SubmitReceipt {
            task_name: capture(&self.task_name),
            project_dir: capture(&self.project_dir),
        }
    }

    /// Status line and headers of an HTTP error dump, plus the client's own
    /// `Server answered with:` summary.
    pub fn parse_http_failure(&self, output: &str) -> Option<HttpFailure> {
        let mut lines = output.lines();
        let mut failure = lines
            .by_ref()
            .find_map(|line| self.status_line.captures(line))
            .map(|c| HttpFailure {
                status: c[1].parse().ok(),
                reason: c.get(2).map(|m| m.as_str().to_owned()).filter(|r| !r.is_empty()),
                headers: vec![],
            });
        if let Some(failure) = failure.as_mut() {
            for line in lines {
                let Some(h) = self.header_line.captures(line) else {
                    break;
                };
                failure.headers.push((h[1].to_owned(), h[2].to_owned()));
            }
        }

        if let Some(c) = self.answered.captures(output) {
            let failure = failure.get_or_insert_with(HttpFailure::default);
            if failure.reason.is_none() && !c[1].is_empty() {
                failure.reason = Some(c[1].to_owned());
            }
        }

        failure
    }
}

fn last_lines(s: &str, n: usize) -> String {
    let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}
