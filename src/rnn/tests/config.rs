use crate::assert_err;
use crate::errors::RnnError;
use crate::rnn::{Init, RnnConfig};

#[test]
fn test_config_defaults() {
    let config = RnnConfig::new(10, 4);
    assert_eq!(config.input_size, 10);
    assert_eq!(config.hidden_size, 4);
    assert_eq!(config.weight_init, Init::Xavier);
    assert_eq!(config.bias_init, Init::Zeros);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate() {
    assert_err!(
        RnnConfig::new(0, 4).validate(),
        RnnError::InvalidConfig("input_size须大于0")
    );
    assert_err!(
        RnnConfig::new(10, 0).validate(),
        RnnError::InvalidConfig("hidden_size须大于0")
    );
}

#[test]
fn test_config_from_json() {
    // 1. 省略初始化方式时使用默认值
    let config = RnnConfig::from_json_str(r#"{ "input_size": 3, "hidden_size": 5 }"#).unwrap();
    assert_eq!(config, RnnConfig::new(3, 5));

    // 2. 显式指定初始化方式
    let config = RnnConfig::from_json_str(
        r#"{
            "input_size": 3,
            "hidden_size": 5,
            "weight_init": { "Normal": { "mean": 0.0, "std": 0.01 } },
            "bias_init": { "Constant": 0.1 }
        }"#,
    )
    .unwrap();
    assert_eq!(config.weight_init, Init::Normal { mean: 0.0, std: 0.01 });
    assert_eq!(config.bias_init, Init::Constant(0.1));

    // 3. 读入后同样会检查有效性
    assert_err!(
        RnnConfig::from_json_str(r#"{ "input_size": 3, "hidden_size": 0 }"#),
        RnnError::InvalidConfig("hidden_size须大于0")
    );

    // 4. 非法JSON
    assert_err!(
        RnnConfig::from_json_str(r#"{ "input_size": 3 "#),
        RnnError::Serialization(_)
    );
}

#[test]
fn test_config_json_round_trip() {
    let config = RnnConfig::new(7, 2).with_weight_init(Init::Kaiming);
    let json = config.to_json_string().unwrap();
    assert_eq!(RnnConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_config_from_json_file() {
    let path = std::env::temp_dir().join(format!("only_rnn_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "input_size": 4, "hidden_size": 6 }"#).unwrap();
    assert_eq!(RnnConfig::from_json_file(&path).unwrap(), RnnConfig::new(4, 6));
    std::fs::remove_file(&path).unwrap();

    assert_err!(RnnConfig::from_json_file(&path), RnnError::Io(_));
}
