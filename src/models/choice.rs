//! 选项列表编辑器
//!
//! 维护一个有序、有界（2-4 个）的答案选项列表。
//! 标签 A-D 不存储，每次根据位置重新推导。

/// 选项数量下限
pub const MIN_CHOICES: usize = 2;
/// 选项数量上限
pub const MAX_CHOICES: usize = 4;

/// 单个答案选项
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Choice {
    pub text: String,
}

impl Choice {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 根据位置推导选项标签：0 → 'A'，1 → 'B'，以此类推
pub fn choice_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// 根据位置推导载荷中的字段名：0 → "choiceA"
pub fn choice_key(index: usize) -> String {
    format!("choice{}", choice_label(index))
}

/// 有界选项列表
///
/// 职责：
/// - 保证选项数量始终在 [2, 4] 内
/// - 只支持在末尾追加 / 移除（不支持移除中间项）
/// - 越界操作是静默 no-op，不是错误
///
/// 每次变更都构造新的列表替换旧的，绝不原地篡改已交出的序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    choices: Vec<Choice>,
}

impl ChoiceList {
    /// 创建初始列表：两个空选项
    pub fn new() -> Self {
        Self {
            choices: vec![Choice::default(), Choice::default()],
        }
    }

    /// 从已有文本构造
    ///
    /// 文本数量不在 [2, 4] 内时返回 None
    pub fn from_texts(texts: &[String]) -> Option<Self> {
        if !(MIN_CHOICES..=MAX_CHOICES).contains(&texts.len()) {
            return None;
        }
        Some(Self {
            choices: texts.iter().map(Choice::new).collect(),
        })
    }

    /// 追加一个空选项；已有 4 个时 no-op
    pub fn add_choice(&mut self) {
        if self.choices.len() < MAX_CHOICES {
            let mut next = self.choices.clone();
            next.push(Choice::default());
            self.choices = next;
        }
    }

    /// 移除最后一个选项；只剩 2 个时 no-op
    pub fn remove_choice(&mut self) {
        if self.choices.len() > MIN_CHOICES {
            let next = self.choices[..self.choices.len() - 1].to_vec();
            self.choices = next;
        }
    }

    /// 修改指定位置的选项文本；越界时 no-op
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if index < self.choices.len() {
            let mut next = self.choices.clone();
            next[index].text = text.into();
            self.choices = next;
        }
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// 按位置遍历 (标签, 文本)
    pub fn labeled(&self) -> impl Iterator<Item = (char, &str)> {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, c)| (choice_label(i), c.text.as_str()))
    }

    /// 标签是否指向当前存在的选项（例如 "choiceC" 在只有两个选项时不存在）
    pub fn contains_key(&self, key: &str) -> bool {
        (0..self.choices.len()).any(|i| choice_key(i) == key)
    }
}

impl Default for ChoiceList {
    fn default() -> Self {
        Self::new()
    }
}
