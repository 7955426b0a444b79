use super::Message;

#[test]
fn message_downcast_ref_matches_payload_type() {
  let message = Message::new(41_u32);
  assert!(message.is::<u32>());
  assert!(!message.is::<i64>());
  assert_eq!(message.downcast_ref::<u32>(), Some(&41));
  assert_eq!(message.downcast_ref::<String>(), None);
}

#[test]
fn message_downcast_returns_payload_or_original() {
  let message = Message::new("hello".to_string());
  let message = match message.downcast::<u32>() {
    Ok(_) => panic!("string payload must not downcast to u32"),
    Err(original) => original,
  };
  assert_eq!(message.downcast::<String>().unwrap(), "hello");
}

#[test]
fn unit_message_is_unit() {
  assert!(Message::unit().is_unit());
  assert!(!Message::new(1_u8).is_unit());
}
