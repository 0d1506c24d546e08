use crate::nn::{NetworkError, NodeId};
use crate::{assert_err, assert_panic};

#[test]
fn test_assert_panic_macro() {
    assert_panic!(panic!("test panic"));
    assert_panic!(panic!("custom test panic msg"), "custom test panic msg");
}

#[test]
fn test_assert_err_macro() {
    let result: Result<(), NetworkError> = Err(NetworkError::NodeNotFound(NodeId(3)));
    assert_err!(result);
    assert_err!(result, NetworkError::NodeNotFound(NodeId(3)));

    let result: Result<(), NetworkError> =
        Err(NetworkError::InvalidConnection("测试消息".to_string()));
    assert_err!(result, NetworkError::InvalidConnection("测试消息"));

    let result: Result<(), NetworkError> = Err(NetworkError::DimensionMismatch {
        expected: 3,
        got: 2,
        message: "测试".to_string(),
    });
    assert_err!(result, NetworkError::DimensionMismatch(3, 2));
    assert_err!(result, NetworkError::DimensionMismatch { expected, .. } if *expected == 3);
}
