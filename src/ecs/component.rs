// src/ecs/component.rs

/// Component（コンポーネント）のマーカートレイトだよ！
///
/// エンティティにくっつけるデータ (`Card`, `StackInfo` とか) はこれを実装する。
/// 中身は空っぽでOK。`World` に「この型はコンポーネントとして扱っていいよ」と伝える目印💡
pub trait Component: 'static {}
