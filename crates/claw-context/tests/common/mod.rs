use claw_context_core::Message;

/// A short Chinese/English install session
pub fn install_session() -> Vec<Message> {
    vec![
        Message::system("你是一个AI助手，帮助用户完成各种任务。"),
        Message::user("好的主人，帮我安装 Everything Claude Code"),
        Message::assistant("好的主人！让我先检查你的系统上是否安装了 Claude Code。"),
        Message::user("我喜欢用 npm，usually 全局安装"),
        Message::assistant(
            "检查结果:\n- Node 20 已就绪\n- npm 可用\n✅ 可以开始安装\n我们决定使用 npm 全局安装。",
        ),
    ]
}

/// A long synthetic session with one system message up front
pub fn long_session(turns: usize) -> Vec<Message> {
    let mut messages = vec![Message::system("Follow the project conventions.")];
    for i in 0..turns {
        messages.push(Message::user(format!("Step {}: please search the logs.", i)));
        messages.push(Message::assistant(format!(
            "- checked shard {}\nUsing grep on shard {}.",
            i, i
        )));
    }
    messages
}
