//! Fixed wording of the course reflection report

/// Placeholder for values the instructor has not supplied
pub const PLACEHOLDER: &str = "XX";

pub const TITLE: &str = "课程反思报告";

pub const HEADING_BASIC_INFO: &str = "一、教学基本信息";
pub const HEADING_ASSESSMENT: &str = "二、考核及学习成绩情况";
pub const HEADING_OUTCOMES: &str = "三、学习成效分析";
pub const HEADING_SUGGESTIONS: &str = "四、改进措施及建议";

pub const COURSE_INTRO: &str = "本学期的《大学信息技术》课程采用SPOC教学模式，理论课选用国家精品线上课程（福建农林大学陈琼老师的《大学信息技术基础》）为蓝本，要求学生通过网课平台进行自学，实验课则安排在实验室进行线下授课。";
pub const GRADING_INTRO: &str = "课程的总评成绩计算方式如下：";
pub const GRADING_FORMULA: &str = "总评成绩=期末考试成绩×60%+实验成绩×20%+网络学习成绩×20%";
pub const GRADING_RULE: &str = "特别要求：当期末考试成绩≥50分时，可直接按上述公式计算总评成绩；当期末考试成绩＜50分时，则在上述公式结果和期末考试成绩之间选择最低值作为总评成绩。";

pub const HEADING_FORMATIVE: &str = "1、网络学习部分成绩的计算";
pub const RUBRIC_INTRO: &str = "本学期网络学习成绩的评分细则如表1所示：";
pub const RUBRIC_TITLE: &str = "网络学习成绩评分细则表";
pub const RUBRIC: [[&str; 3]; 4] = [
    ["评分内容", "权重", "说明"],
    ["单元测验", "60%", "每次测验有3次机会（随机抽题），取最高分"],
    ["综合测验", "30%", "只有1次机会（随机抽题）"],
    ["讨论", "10%", "10次得满分，限课堂交流区，其它地方的讨论不计入成绩"],
];

pub const HEADING_LAB: &str = "2、实验成绩的计算";
pub const HEADING_FINAL: &str = "3、期末考试成绩的计算";
pub const FINAL_INTRO: &str = "由于理论部分的教学内容已在网络课程中安排了单元测验和综合测验，因此期末考试主要考核实验部分的教学内容。本课程期末考试采用万维考试系统进行上机考试，考生登录考试系统后，系统自动为各考生分配试卷，每份试卷的题型和分值组成如下：";
pub const FINAL_PAPER: [&str; 4] = [
    "1) Windows/网络设置操作题15分。",
    "2) MS Office Word操作题30分。",
    "3) MS Office Excel操作题35分。",
    "4) MS Office PPT操作题20分。",
];
pub const FINAL_COVERAGE: &str = "从试题内容来看，试卷基本能覆盖教学大纲中的实践操作内容，能较好地考察学生的掌握情况，也能较真实地反映学生的计算机应用水平。";
pub const HEADING_OVERALL: &str = "4、课程总评成绩情况";

pub const ANALYSIS_LABEL: &str = "分析结果:";
pub const OUTCOMES_INTRO: &str = "从学生的学习过程情况及期末总评成绩来看，大部分学生均能完成本课程的学习任务，其计算机基础知识和计算机应用水平基本达到本课程的教学要求，本课程的教学目的基本实现。";

pub const IMAGE_FAILED: &str = "图片插入失败";
pub const LOGO_FAILED: &str = "图标加载失败";
