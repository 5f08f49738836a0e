use super::*;

const N1: BigDigit = BigDigit::MAX;
const N2: BigDigit = BigDigit::MAX - 1;

fn trim(mut v: Vec<BigDigit>) -> Vec<BigDigit> {
    v.truncate(trimmed_len(&v));
    v
}

#[test]
fn test_cmp_slice_ignores_leading_zeros() {
    assert_eq!(cmp_slice(&[1, 0, 0], &[1]), Equal);
    assert_eq!(cmp_slice(&[], &[0]), Equal);
    assert_eq!(cmp_slice(&[0, 1], &[N1]), Greater);
    assert_eq!(cmp_slice(&[5, 2], &[6, 2, 0]), Less);
}

#[test]
fn test_add2_carry() {
    let mut a = [N1, N1, 0];
    assert_eq!(add2(&mut a, &[1]), 0);
    assert_eq!(a, [0, 0, 1]);

    let mut b = [N1, N1];
    assert_eq!(add2(&mut b, &[1]), 1);
    assert_eq!(b, [0, 0]);
}

#[test]
fn test_sub2_borrow() {
    let mut a = [0, 0, 1];
    sub2(&mut a, &[1]);
    assert_eq!(a, [N1, N1, 0]);
}

#[test]
#[should_panic]
fn test_sub2_underflow() {
    let mut a = [1];
    sub2(&mut a, &[2]);
}

#[test]
fn test_mul3() {
    assert_eq!(trim(mul3(&[N1], &[N1])), vec![1, N2]);
    assert_eq!(trim(mul3(&[1, 2], &[1, 2, 3])), vec![1, 4, 7, 6]);
    assert_eq!(mul3(&[0], &[5, 6]), vec![0, 0, 0, 0]);
    assert_eq!(mul3(&[1, 2, 3], &[4]).len(), 5);
}

#[test]
fn test_div_rem_digit() {
    let (q, r) = div_rem_digit(&[N1, N1], N2);
    assert_eq!(trim(q), vec![2, 1]);
    assert_eq!(r, 3);
}

#[test]
fn test_div_rem_multi_word() {
    // (2^64 - 1) * (2^64 - 2) + 5 divided by 2^64 - 1
    let a = {
        let mut p = mul3(&[N1, N1], &[N2, N1]);
        add2(&mut p, &[5]);
        p
    };
    let (q, r) = div_rem(&a, &[N1, N1]);
    assert_eq!(trim(q), vec![N2, N1]);
    assert_eq!(trim(r), vec![5]);

    let (q, r) = div_rem(&[3, 0, 0], &[4, 1]);
    assert_eq!(trim(q), vec![]);
    assert_eq!(trim(r), vec![3]);
}

#[test]
fn test_div_rem_needs_correction() {
    // top divisor word 2^31 exactly: the trial digit from the top words is an overestimate
    let b = [N1, 0x8000_0000];
    let a = [0, 0, 0x8000_0000];
    let (q, r) = div_rem(&a, &b);
    let mut back = mul3(&q, &b);
    add2(&mut back, &r);
    assert_eq!(trim(back), a.to_vec());
    assert_eq!(cmp_slice(&r, &b), Less);
}

#[test]
fn test_twos_complement_window() {
    assert_eq!(to_twos_complement(false, &[5], 2), vec![5, 0]);
    assert_eq!(to_twos_complement(true, &[1], 2), vec![N1, N1]);
    assert_eq!(to_twos_complement(true, &[0, 1], 3), vec![0, N1, N1]);

    assert_eq!(from_twos_complement(vec![N1, N1]), (true, vec![1, 0]));
    assert_eq!(from_twos_complement(vec![0, N1, N1]), (true, vec![0, 1, 0]));
    assert_eq!(from_twos_complement(vec![N1, 0]), (false, vec![N1, 0]));
}

#[test]
fn test_shift_windows() {
    // 5 << 33
    assert_eq!(trim(shl_window(&[5, 0], 33)), vec![0, 10]);
    // -1 << 4 == -16
    let w = shl_window(&[N1, N1], 4);
    assert_eq!(from_twos_complement(w).0, true);
    assert_eq!(shl_window(&[N1, N1], 4)[0], N1 << 4);

    assert_eq!(shr_window(&[0, 10, 0], 33), vec![5, 0, 0]);
    // -1 >> 100 stays -1
    assert_eq!(shr_window(&[N1, N1], 100), vec![N1, N1]);
    // -3 >> 1 == -2
    assert_eq!(shr_window(&[N1 - 2, N1], 1), vec![N2, N1]);
}
