use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Formats `data` as a base64 `data:` URL, the same shape `HTMLCanvasElement.toDataURL` produces.
pub fn encode_data_url(data: &[u8], mediatype: Option<&str>) -> String {
	let mediatype = mediatype.unwrap_or("");
	let data = STANDARD.encode(data);
	format!("data:{mediatype};base64,{data}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_data_url() {
		assert_eq!(
			encode_data_url(b"sketch", Some("text/plain")),
			"data:text/plain;base64,c2tldGNo"
		);
		assert_eq!(encode_data_url(&[0xfb, 0xff], None), "data:;base64,+/8=");
	}
}
