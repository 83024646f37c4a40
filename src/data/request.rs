//! Request signatures understood by the course data endpoints.

/// Request for the graph catalogue.
pub const GRAPHS_REQUEST: &str = "/graphs";

/// Request for the graph called `name`.
pub fn graph_request(name: &str) -> String {
	format!("/get-json-data?graphName={}", form_encode(name))
}

/// Request for the course information of `code`.
pub fn course_request(code: &str) -> String {
	format!("/course?name={}", form_encode(code))
}

/// `application/x-www-form-urlencoded` encoding of a query value.
pub fn form_encode(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for byte in value.bytes() {
		match byte {
			b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
				out.push(byte as char)
			}
			b' ' => out.push('+'),
			_ => out.push_str(&format!("%{byte:02X}")),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn graph_names_are_form_encoded() {
		assert_eq!(
			graph_request("Computer Science"),
			"/get-json-data?graphName=Computer+Science"
		);
		assert_eq!(
			graph_request("(unofficial) Statistics"),
			"/get-json-data?graphName=%28unofficial%29+Statistics"
		);
	}

	#[test]
	fn course_codes_pass_through() {
		assert_eq!(course_request("aaa100H1"), "/course?name=aaa100H1");
	}

	#[test]
	fn non_ascii_is_percent_encoded() {
		assert_eq!(form_encode("é&"), "%C3%A9%26");
	}
}
