//! The fixed sample document used when a day has no data

use super::{CardItem, GenericItem, HighlightItem, NewsDocument, NewsletterItem, PaperItem};

/// Build the deterministic fallback document for a date key.
///
/// Substituted whenever the real document for a day is missing or fails to
/// parse, so a run always produces a page. The items are fixed; only the
/// `date` field and the screenshot path vary with the key.
pub fn sample_document(key: &str) -> NewsDocument {
    NewsDocument {
        date: key.to_string(),
        insights: vec![
            HighlightItem {
                title: "开源多模态模型刷新多项评测纪录".to_string(),
                author: "@ml_insider".to_string(),
                date: "今天 06:30".to_string(),
                summary: "新发布的开源权重在多模态理解基准上追平闭源旗舰，推理成本降至十分之一，\
                          社区讨论集中在数据配方与蒸馏策略。"
                    .to_string(),
                screenshot: None,
                link: Some("https://example.com/news/multimodal-sota".to_string()),
            },
            HighlightItem {
                title: "推理时扩展成为新的算力竞赛赛道".to_string(),
                author: "@scaling_watch".to_string(),
                date: "今天 08:00".to_string(),
                summary: "多家实验室把算力投入从预训练转向推理时搜索与验证，\
                          长链路推理的单位成本正在快速下降。"
                    .to_string(),
                screenshot: Some(format!("screenshots/{}/inference-scaling.png", key)),
                link: Some("https://example.com/news/inference-scaling".to_string()),
            },
        ],
        newsletters: vec![NewsletterItem {
            title: "本周 Agent 工程实践精选".to_string(),
            source: "AI Engineering Weekly".to_string(),
            summary: "覆盖生产环境中工具调用的重试策略、评测集构建与回归守护，\
                      附三个可复现的开源案例。"
                .to_string(),
            link: Some("https://example.com/newsletter/agent-weekly".to_string()),
        }],
        papers: vec![PaperItem {
            title: "Self-Correcting Decoders for Long-Horizon Reasoning".to_string(),
            authors: "L. Chen, M. Okafor, et al.".to_string(),
            summary: "提出一种在解码阶段自我校正的结构，长程推理任务的错误率下降 23%，\
                      且无需额外训练数据。"
                .to_string(),
            link: Some("https://arxiv.org/abs/2608.01234".to_string()),
        }],
        x_posts: vec![HighlightItem {
            title: "一张图看懂本周模型发布".to_string(),
            author: "@weekly_charts".to_string(),
            date: "昨天 22:15".to_string(),
            summary: "社区整理的发布时间线与参数对比图，覆盖本周全部五个主要开源权重。"
                .to_string(),
            screenshot: None,
            link: Some("https://x.com/weekly_charts/status/1".to_string()),
        }],
        github: vec![CardItem {
            name: "tensor-compass".to_string(),
            description: "面向多后端的张量调试与性能剖析工具，支持逐层 diff 与算子热力图。"
                .to_string(),
            stars: Some("3.2k".to_string()),
            link: Some("https://github.com/example/tensor-compass".to_string()),
        }],
        hn: vec![GenericItem {
            title: "Ask HN: 生产环境里你们怎么做模型回滚？".to_string(),
            summary: "热帖讨论灰度发布、影子流量与评测门禁的取舍，\
                      高赞回答给出一套双通道回滚清单。"
                .to_string(),
            source: Some("Hacker News".to_string()),
            author: None,
            link: Some("https://news.ycombinator.com/item?id=1".to_string()),
        }],
        tools: vec![CardItem {
            name: "PromptBench Studio".to_string(),
            description: "本地优先的提示词评测台，内置批量对比、版本管理与回归报告。"
                .to_string(),
            stars: None,
            link: Some("https://example.com/tools/promptbench".to_string()),
        }],
        ..Default::default()
    }
}
