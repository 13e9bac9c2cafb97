//! Prompt templates for the report's commentary sections

use crate::analysis::CategoryAnalysis;

/// Prompt for section three (learning outcomes)
pub const LEARNING_OUTCOMES_PROMPT: &str = concat!(
    "（然后从下面的方面进行分析：",
    "1、学习本课程之前学生的课程基础的掌握情况；",
    "2、学习本课程时，学生的学习态度情况（如提问情况、主动性）；",
    "3、课时安排对教学效果的影响；",
    "4、教学方式对教学效果的影响；",
    "5、教学内容对教学效果的影响。）",
    "请注意，分析内容不要过于细节，可以适当使用较为概括和笼统的语言。",
    "将内容控制在500字以内。",
);

/// Prompt for section four (improvement suggestions)
pub const SUGGESTIONS_PROMPT: &str = concat!(
    "请写出几条针对这个课程方方面面都可以的改进措施及建议。",
    "请注意，分析内容不要过于细节，可以适当使用较为概括和笼统的语言。",
    "将内容控制在500字以内。",
);

/// Instructor-voice summary prompt for one score category
pub fn category_prompt(analysis: &CategoryAnalysis) -> String {
    let summary = &analysis.summary;

    let distribution: String = analysis
        .table
        .iter()
        .map(|bucket| {
            format!(
                "{}分数段: 人数 {}, 占比 {:.2}%；",
                bucket.label(),
                bucket.count,
                bucket.percentage
            )
        })
        .collect();

    format!(
        "你作为这门课的授课老师，正在写校方布置的课程总结报告，对该门课学生{category}的成绩做出简要的书面总结和分析\
         (除非学生成绩数据比较特殊，否则请不要过多的展示各分数段的总结和过分的罗列数值，而是稍微宏观一些做出总结)。\
         以下为学生的成绩数据: 总人数为{count}，最高分为{max}，最低分为{min}，平均分为{mean}。\
         各分数段的分布情况如下：{distribution}\
         备注：生成的内容中要大幅减少转接词的使用（例如首先、其次、最后、综上所述、总的来说、此外、值得XX的是、XXXX的是）。\
         同时要保证生成的内容通俗易懂，不晦涩，不要用太书面化的词语。将内容控制在500字以内。",
        category = analysis.category.label(),
        count = summary.count,
        max = summary.max_text(),
        min = summary.min_text(),
        mean = summary.mean_text(),
        distribution = distribution,
    )
}

/// Remove Markdown heading and emphasis markers from a reply
pub fn strip_markdown(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '#' | '*')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::model::ScoreCategory;

    #[test]
    fn test_category_prompt_embeds_statistics() {
        let analysis = analyze(ScoreCategory::Final, &[55.0, 60.0, 65.0, 99.0, 100.0]);
        let prompt = category_prompt(&analysis);

        assert!(prompt.contains("学生期末的成绩"));
        assert!(prompt.contains("总人数为5，最高分为100，最低分为55，平均分为75.80。"));
        assert!(prompt.contains("60-70分分数段: 人数 2, 占比 40.00%；"));
        assert!(prompt.contains("90-100分分数段: 人数 2, 占比 40.00%；"));
        assert!(prompt.contains("0-10分分数段: 人数 0, 占比 0.00%；"));
    }

    #[test]
    fn test_strip_markdown() {
        assert_eq!(strip_markdown("## 建议\n**加强**练习"), " 建议\n加强练习");
        assert_eq!(strip_markdown("无标记"), "无标记");
    }
}
